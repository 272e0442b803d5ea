use super::constants::*;

pub fn rule(ch: char) -> String {
    std::iter::repeat(ch).take(FRAME_WIDTH).collect()
}

pub fn header_lines() -> Vec<String> {
    let nav = NAV_LINKS.join(" | ");
    let cart = format!("[Cart: {CART_COUNT}]");
    let left = format!("{BRAND}   {nav}");
    let padding = FRAME_WIDTH.saturating_sub(left.chars().count() + cart.chars().count());

    vec![
        rule('='),
        format!("{left}{}{cart}", " ".repeat(padding)),
        format!("Search: [{SEARCH_PLACEHOLDER}]"),
        rule('='),
    ]
}

pub fn footer_lines(year: i32) -> Vec<String> {
    let mut lines = vec![rule('-'), BRAND.to_string(), FOOTER_TAGLINE.to_string()];
    lines.push(FOOTER_CONTACTS.join("  ·  "));
    lines.push(String::new());
    for (title, links) in FOOTER_SECTIONS {
        lines.push(format!("{title}: {}", links.join(", ")));
    }
    lines.push(String::new());
    lines.push(format!("© {year} {BRAND}. All rights reserved."));
    lines.push(FOOTER_CREDIT.to_string());
    lines.push(rule('-'));
    lines
}
