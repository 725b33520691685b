use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const IPV4_ADDR: Color = Color::Cyan;
pub const IPV6_ADDR: Color = Color::BrightCyan;
pub const PORT: Color = Color::BrightBlue;
pub const CVE: Color = Color::Magenta;

pub const RISK_CRITICAL: Color = Color::Red;
pub const RISK_HIGH: Color = Color::TrueColor { r: 255, g: 165, b: 0 };
pub const RISK_MEDIUM: Color = Color::Yellow;
pub const RISK_LOW: Color = Color::Green;
pub const RISK_NONE: Color = Color::BrightBlack;
