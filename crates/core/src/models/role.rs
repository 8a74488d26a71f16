//! Lane roles and their presentation lookup tables

use std::str::FromStr;

use crate::error::Error;

/// The five lane roles, one per roster slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Jungle,
    Mid,
    Top,
    Support,
    Adc,
}

impl Role {
    /// All roles in canonical order
    pub const ALL: [Role; 5] = [Role::Jungle, Role::Mid, Role::Top, Role::Support, Role::Adc];

    pub fn label(&self) -> &'static str {
        match self {
            Role::Jungle => "Jungle",
            Role::Mid => "Mid",
            Role::Top => "Top",
            Role::Support => "Support",
            Role::Adc => "ADC",
        }
    }

    /// Icon asset file name, relative to the assets directory
    pub fn icon(&self) -> &'static str {
        match self {
            Role::Jungle => "jungle.png",
            Role::Mid => "mid.png",
            Role::Top => "top.png",
            Role::Support => "support.png",
            // ADC plays bottom lane
            Role::Adc => "bot.png",
        }
    }

    pub fn color(&self) -> RoleColor {
        match self {
            Role::Jungle => RoleColor::new("bg-green-500", 0x22, 0xc5, 0x5e),
            Role::Mid => RoleColor::new("bg-red-500", 0xef, 0x44, 0x44),
            Role::Top => RoleColor::new("bg-orange-500", 0xf9, 0x73, 0x16),
            Role::Support => RoleColor::new("bg-blue-500", 0x3b, 0x82, 0xf6),
            Role::Adc => RoleColor::new("bg-purple-500", 0xa8, 0x55, 0xf7),
        }
    }

    pub fn style(&self) -> RoleStyle {
        RoleStyle {
            icon: self.icon(),
            color: self.color(),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jungle" => Ok(Role::Jungle),
            "mid" => Ok(Role::Mid),
            "top" => Ok(Role::Top),
            "support" => Ok(Role::Support),
            "adc" | "bot" => Ok(Role::Adc),
            _ => Err(Error::UnknownRole(s.to_string())),
        }
    }
}

/// Color token for a role card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleColor {
    /// Stylesheet token (e.g. `bg-green-500`)
    pub token: &'static str,
    pub rgb: (u8, u8, u8),
}

impl RoleColor {
    const fn new(token: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self {
            token,
            rgb: (r, g, b),
        }
    }
}

/// Presentation metadata for a role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleStyle {
    pub icon: &'static str,
    pub color: RoleColor,
}
