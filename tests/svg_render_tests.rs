use synth_chart::api::{RenderRequest, Theme, ThemePalette, render_chart};

fn btc_dark() -> RenderRequest {
    RenderRequest::new("BTC-USD", "1m")
        .and_then(|r| r.with_size(640, 360))
        .expect("valid request")
        .with_theme(Theme::Dark)
}

#[test]
fn markup_embeds_symbol_timeframe_and_size() {
    let rendered = render_chart(&btc_dark()).expect("render");
    let svg = rendered.markup();

    assert!(svg.starts_with("<svg xmlns='http://www.w3.org/2000/svg' width='640' height='360'"));
    assert!(svg.contains("viewBox='0 0 640 360'"));
    assert!(svg.contains(">BTC-USD</text>"));
    assert!(svg.contains(">timeframe 1m</text>"));
    assert!(svg.contains("class='candle-body'"));
    assert!(svg.contains("class='candle-wick'"));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn default_size_is_800_by_450() {
    let request = RenderRequest::new("ETH-USD", "5m").expect("valid request");
    let svg = render_chart(&request).expect("render").markup().to_owned();

    assert!(svg.contains("width='800'"));
    assert!(svg.contains("height='450'"));
}

#[test]
fn unknown_theme_falls_back_to_light_background() {
    let request = RenderRequest::new("ETH-USD", "5m")
        .expect("valid request")
        .with_theme(Theme::from_name("neon"));
    let svg = render_chart(&request).expect("render").markup().to_owned();

    let light_bg = format!("fill='{}'", ThemePalette::LIGHT.background);
    assert_eq!(light_bg, "fill='#F7F9FC'");
    assert!(svg.contains(&light_bg));
    assert!(!svg.contains("#0B0E11"));
}

#[test]
fn shape_counts_match_candle_count() {
    let request = btc_dark();
    let svg = render_chart(&request).expect("render").markup().to_owned();

    let bodies = svg.matches("class='candle-body'").count();
    let wicks = svg.matches("class='candle-wick'").count();
    assert_eq!(request.candle_count(), 40);
    assert_eq!(bodies, 40);
    assert_eq!(wicks, 40);
    assert_eq!(svg.matches("opacity='0.55'").count(), 6);
    assert!(!svg.contains("<polyline"));
    assert!(!svg.contains("<path"));
}

#[test]
fn grid_is_emitted_before_any_candle() {
    let svg = render_chart(&btc_dark()).expect("render").markup().to_owned();

    let last_grid = svg.rfind("opacity='0.55'").expect("grid line");
    let first_wick = svg.find("class='candle-wick'").expect("wick");
    let border = svg.find("fill='none'").expect("border");
    let subtitle = svg.find(">timeframe 1m<").expect("subtitle");
    assert!(subtitle < border);
    assert!(border < last_grid);
    assert!(last_grid < first_wick);
}

#[test]
fn first_candle_shapes_match_reference_layout() {
    let svg = render_chart(&btc_dark()).expect("render").markup().to_owned();

    assert!(svg.contains(
        "<line class='candle-wick' x1='59.05' y1='175.18' x2='59.05' y2='275.09' \
         stroke='#0ECB81' stroke-width='1.2'/><rect class='candle-body' x='55.05' \
         y='213.83' width='8.00' height='41.02' fill='#0ECB81' rx='1'/>"
    ));
    assert!(svg.contains(
        "<rect x='52' y='96' width='564' height='234' fill='none' stroke='#1E2329' stroke-width='1'/>"
    ));
    assert!(svg.contains(
        "<line x1='52' y1='142.80' x2='616' y2='142.80' stroke='#1E2329' stroke-width='1' opacity='0.55'/>"
    ));
}

#[test]
fn content_id_matches_reference_renders() {
    let dark = render_chart(&btc_dark()).expect("render");
    assert_eq!(dark.markup().len(), 9_367);
    assert_eq!(
        dark.content_id(),
        "0f6ea93956b8ef07825970783f4949a499cfdd92bd4c4d0104624995f3b7029f"
    );

    let light = render_chart(&RenderRequest::new("ETH-USD", "5m").expect("valid request"))
        .expect("render");
    assert_eq!(
        light.content_id(),
        "c2eba5205ed9dbad54b6b710306bd6d518f85e6588b2d7b6bc1a1089515a98ba"
    );
}

#[test]
fn identical_requests_render_identical_markup() {
    let a = render_chart(&btc_dark()).expect("render");
    let b = render_chart(&btc_dark()).expect("render");
    assert_eq!(a, b);
    assert_eq!(a.content_id().len(), 64);
    assert!(a.content_id().chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn symbol_markup_is_escaped() {
    let request = RenderRequest::new("<AT&T>", "1d").expect("valid request");
    let svg = render_chart(&request).expect("render").markup().to_owned();
    assert!(svg.contains(">&lt;AT&amp;T&gt;</text>"));
    assert!(!svg.contains("<AT&T>"));
}

#[test]
fn floored_canvas_matches_reference_render() {
    let request = RenderRequest::new("BTC-USD", "1m")
        .and_then(|r| r.with_size(150, 150))
        .expect("valid request");
    let rendered = render_chart(&request).expect("render");
    let svg = rendered.markup();

    assert_eq!(request.candle_count(), 18);
    assert!(svg.contains(
        "<rect x='52' y='96' width='120' height='100' fill='none' stroke='#D9DEE7' stroke-width='1'/>\
         <line x1='52' y1='96.00' x2='126' y2='96.00' stroke='#D9DEE7' stroke-width='1' opacity='0.55'/>"
    ));
    assert!(svg.contains(
        "<line class='candle-wick' x1='55.33' y1='24.86' x2='55.33' y2='86.26' \
         stroke='#0ECB81' stroke-width='1.2'/><rect class='candle-body' x='53.13' \
         y='48.62' width='4.40' height='25.21' fill='#0ECB81' rx='1'/>"
    ));
    assert_eq!(svg.len(), 4_697);
    assert_eq!(
        rendered.content_id(),
        "3b209c371ba1b43218c17388081674ffa4c730840c57cca2349c5f2fddae8428"
    );
}
