//! Minimal skin: listings and contact only, almost no chrome.

use crate::components;
use crate::skins::font_stack;
use crate::PageData;

fn css(data: &PageData) -> String {
    let primary = components::safe_color(&data.branding.primary_color, "#111827");
    let font = font_stack(data.branding.font);
    format!(
        "body{{margin:0 auto;max-width:720px;font-family:{font};color:#111827;\
         padding:0 16px;}}\
         .hero{{padding:64px 0 32px;}}\
         .hero .cta{{color:{primary};text-decoration:underline;}}\
         section{{padding:24px 0;}}\
         .card{{padding:16px 0;border-top:1px solid #e5e7eb;}}\
         .card img{{max-width:100%;}}\
         .price{{font-weight:600;}}\
         .page-footer{{padding:32px 0;color:#6b7280;}}"
    )
}

pub fn render(data: &PageData) -> String {
    format!(
        "<!doctype html>\n<html>\n{}\n<body>\n{}\n{}\n{}\n{}\n{}\n</body>\n</html>",
        components::head(data, &css(data)),
        components::hero(data),
        components::about(data),
        components::properties(data),
        components::contact(data),
        components::footer(data),
    )
}
