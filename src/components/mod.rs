pub mod cart_drawer;
pub mod footer;
pub mod header;
pub mod hero;
pub mod icons;
pub mod menu_item_card;
pub mod menu_section;
pub mod notification_bar;
pub mod splash_screen;

pub use cart_drawer::CartDrawer;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use menu_item_card::MenuItemCard;
pub use menu_section::MenuSection;
pub use notification_bar::NotificationBar;
pub use splash_screen::SplashScreen;
