//! Classic skin: agent-first layout, serif-friendly spacing.

use crate::components;
use crate::skins::font_stack;
use crate::PageData;

fn css(data: &PageData) -> String {
    let primary = components::safe_color(&data.branding.primary_color, "#7c2d12");
    let secondary = components::safe_color(&data.branding.secondary_color, "#1c1917");
    let font = font_stack(data.branding.font);
    format!(
        "body{{margin:0;font-family:{font};color:{secondary};line-height:1.7;}}\
         .hero{{border-bottom:4px double {primary};padding:72px 24px;text-align:center;}}\
         .hero h1{{color:{primary};}}\
         .hero .cta{{border:2px solid {primary};color:{primary};padding:10px 24px;\
         text-decoration:none;display:inline-block;margin-top:12px;}}\
         section{{padding:40px 24px;max-width:840px;margin:0 auto;}}\
         h2{{color:{primary};border-bottom:1px solid #d6d3d1;padding-bottom:8px;}}\
         .card{{border-bottom:1px solid #e7e5e4;padding:20px 0;}}\
         .card img{{max-width:100%;}}\
         .price{{font-weight:bold;}}\
         .stars{{color:{primary};}}\
         .page-footer{{border-top:4px double {primary};padding:24px;text-align:center;}}"
    )
}

pub fn render(data: &PageData) -> String {
    format!(
        "<!doctype html>\n<html>\n{}\n<body>\n{}\n{}\n{}\n{}\n{}\n{}\n{}\n</body>\n</html>",
        components::head(data, &css(data)),
        components::hero(data),
        components::about(data),
        components::services(data.content),
        components::properties(data),
        components::testimonials(data.content),
        components::contact(data),
        components::footer(data),
    )
}
