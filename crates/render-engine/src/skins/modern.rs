//! Modern skin: full-bleed hero, card grid for listings.

use crate::components;
use crate::skins::font_stack;
use crate::PageData;

fn css(data: &PageData) -> String {
    let primary = components::safe_color(&data.branding.primary_color, "#1d4ed8");
    let secondary = components::safe_color(&data.branding.secondary_color, "#0f172a");
    let font = font_stack(data.branding.font);
    format!(
        "body{{margin:0;font-family:{font};color:{secondary};}}\
         .hero{{background:{primary};color:#fff;padding:96px 24px;text-align:center;}}\
         .hero .cta{{background:#fff;color:{primary};padding:12px 28px;border-radius:999px;\
         text-decoration:none;display:inline-block;margin-top:16px;}}\
         section{{padding:48px 24px;max-width:960px;margin:0 auto;}}\
         .card{{border:1px solid #e2e8f0;border-radius:12px;padding:20px;margin:12px 0;}}\
         .card img{{max-width:100%;border-radius:8px;}}\
         .price{{color:{primary};font-size:1.4em;font-weight:bold;}}\
         .stars{{color:#f59e0b;}}\
         .page-footer{{background:{secondary};color:#fff;padding:24px;text-align:center;}}"
    )
}

pub fn render(data: &PageData) -> String {
    format!(
        "<!doctype html>\n<html>\n{}\n<body>\n{}\n{}\n{}\n{}\n{}\n{}\n{}\n</body>\n</html>",
        components::head(data, &css(data)),
        components::hero(data),
        components::properties(data),
        components::services(data.content),
        components::about(data),
        components::testimonials(data.content),
        components::contact(data),
        components::footer(data),
    )
}
