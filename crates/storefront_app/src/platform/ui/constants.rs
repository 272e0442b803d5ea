pub const FRAME_WIDTH: usize = 72;

pub const BRAND: &str = "GameGear Pro";
pub const SEARCH_PLACEHOLDER: &str = "Search gaming gear...";
pub const NAV_LINKS: [&str; 3] = ["Home", "Categories", "Deals"];
pub const CART_COUNT: u32 = 0;

pub const SECTION_TITLE: &str = "Featured Gaming Gear";
pub const SECTION_SUBTITLE: &str = "Level up your gaming experience with our premium selection";
pub const ADD_TO_CART_LABEL: &str = "Add to Cart";

pub const FOOTER_TAGLINE: &str = "Your ultimate destination for premium gaming equipment.";
pub const FOOTER_CONTACTS: [&str; 3] = [
    "support@gamegear.com",
    "+1 (555) 123-4567",
    "Gaming District, Tech City",
];
pub const FOOTER_SECTIONS: [(&str, [&str; 4]); 3] = [
    (
        "Categories",
        [
            "Gaming Keyboards",
            "Gaming Mice",
            "Gaming Headsets",
            "Gaming Monitors",
        ],
    ),
    (
        "Support",
        ["Help Center", "Shipping Info", "Returns", "Warranty"],
    ),
    (
        "Account",
        ["Sign In", "Create Account", "Order History", "Wishlist"],
    ),
];
pub const FOOTER_CREDIT: &str = "Built with love for gamers by gamers";
