//! # Portal Catalog
//!
//! The single source of truth for every portal's visual identity. Each
//! [PortalProfile] aggregates the colors, typography, spacing and motion of one
//! portal, so nothing portal-keyed lives in a parallel table that could drift.
//!
//! The catalog is built once on first access and never mutated afterwards,
//! which makes concurrent reads safe.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::ThemeResult;
use crate::id::PortalId;
use crate::metrics::{AnimationProfile, FontScale, SpacingScale};
use crate::palette::ColorScale;

/// Sidebar appearance a portal prefers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarStyle {
    /// Dark sidebar on a light page.
    Dark,
    /// Light sidebar.
    Light,
    /// No sidebar; top navigation only.
    None,
}

/// Descriptive metadata of a portal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalMetadata {
    /// Display name.
    pub name: &'static str,
    /// Short name for compact navigation.
    pub short_name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Icon glyph.
    pub icon: &'static str,
    /// Expected user type.
    pub user_type: &'static str,
}

/// Everything authored for one portal.
#[derive(Debug, Clone, PartialEq)]
pub struct PortalProfile {
    /// The portal this profile belongs to.
    pub id: PortalId,
    /// Light-mode primary scale.
    pub primary: ColorScale,
    /// Light-mode accent color.
    pub accent: &'static str,
    /// Preferred sidebar appearance.
    pub sidebar_style: SidebarStyle,
    /// Descriptive metadata.
    pub metadata: PortalMetadata,
    /// Typography scale.
    pub font_size: FontScale,
    /// Spacing density.
    pub spacing: SpacingScale,
    /// Motion personality.
    pub animations: AnimationProfile,
}

static CATALOG: Lazy<[PortalProfile; 6]> = Lazy::new(|| {
    [
        PortalProfile {
            id: PortalId::PlatformAdmin,
            primary: ColorScale::new([
                "hsl(239, 84%, 97%)",
                "hsl(239, 84%, 93%)",
                "hsl(239, 84%, 87%)",
                "hsl(239, 84%, 78%)",
                "hsl(239, 84%, 68%)",
                "hsl(239, 84%, 59%)",
                "hsl(239, 84%, 51%)",
                "hsl(239, 84%, 43%)",
                "hsl(239, 84%, 35%)",
                "hsl(239, 84%, 27%)",
            ]),
            accent: "hsl(280, 87%, 60%)",
            sidebar_style: SidebarStyle::Dark,
            metadata: PortalMetadata {
                name: "Platform Admin",
                short_name: "Admin",
                description: "Operate the platform, its tenants and partners",
                icon: "🛡️",
                user_type: "platform_admin",
            },
            font_size: FontScale::compact(),
            spacing: SpacingScale::compact(),
            animations: AnimationProfile::snappy(),
        },
        PortalProfile {
            id: PortalId::PlatformResellers,
            primary: ColorScale::new([
                "hsl(160, 84%, 96%)",
                "hsl(160, 84%, 90%)",
                "hsl(160, 84%, 81%)",
                "hsl(160, 84%, 68%)",
                "hsl(160, 84%, 52%)",
                "hsl(160, 84%, 39%)",
                "hsl(160, 84%, 32%)",
                "hsl(160, 84%, 26%)",
                "hsl(160, 84%, 21%)",
                "hsl(160, 84%, 17%)",
            ]),
            accent: "hsl(45, 93%, 47%)",
            sidebar_style: SidebarStyle::Light,
            metadata: PortalMetadata {
                name: "Partner Portal",
                short_name: "Partners",
                description: "Manage referred tenants, commissions and deals",
                icon: "🤝",
                user_type: "partner",
            },
            font_size: FontScale::standard(),
            spacing: SpacingScale::standard(),
            animations: AnimationProfile::smooth(),
        },
        PortalProfile {
            id: PortalId::PlatformTenants,
            primary: ColorScale::new([
                "hsl(199, 89%, 97%)",
                "hsl(199, 89%, 92%)",
                "hsl(199, 89%, 84%)",
                "hsl(199, 89%, 72%)",
                "hsl(199, 89%, 58%)",
                "hsl(199, 89%, 48%)",
                "hsl(199, 89%, 40%)",
                "hsl(199, 89%, 33%)",
                "hsl(199, 89%, 27%)",
                "hsl(199, 89%, 22%)",
            ]),
            accent: "hsl(330, 81%, 60%)",
            sidebar_style: SidebarStyle::Light,
            metadata: PortalMetadata {
                name: "Tenant Portal",
                short_name: "Tenant",
                description: "Subscription, licensing and settings of a tenant organisation",
                icon: "🏢",
                user_type: "tenant_admin",
            },
            font_size: FontScale::standard(),
            spacing: SpacingScale::standard(),
            animations: AnimationProfile::smooth(),
        },
        PortalProfile {
            id: PortalId::IspAdmin,
            primary: ColorScale::new([
                "hsl(217, 91%, 97%)",
                "hsl(217, 91%, 93%)",
                "hsl(217, 91%, 86%)",
                "hsl(217, 91%, 76%)",
                "hsl(217, 91%, 66%)",
                "hsl(217, 91%, 60%)",
                "hsl(217, 91%, 50%)",
                "hsl(217, 91%, 42%)",
                "hsl(217, 91%, 34%)",
                "hsl(217, 91%, 26%)",
            ]),
            accent: "hsl(173, 80%, 40%)",
            sidebar_style: SidebarStyle::Dark,
            metadata: PortalMetadata {
                name: "ISP Admin",
                short_name: "ISP",
                description: "Network operations, subscribers and billing for an ISP",
                icon: "📡",
                user_type: "isp_staff",
            },
            font_size: FontScale::compact(),
            spacing: SpacingScale::compact(),
            animations: AnimationProfile::snappy(),
        },
        PortalProfile {
            id: PortalId::IspReseller,
            primary: ColorScale::new([
                "hsl(25, 95%, 97%)",
                "hsl(25, 95%, 92%)",
                "hsl(25, 95%, 83%)",
                "hsl(25, 95%, 72%)",
                "hsl(25, 95%, 61%)",
                "hsl(25, 95%, 53%)",
                "hsl(25, 95%, 45%)",
                "hsl(25, 95%, 37%)",
                "hsl(25, 95%, 30%)",
                "hsl(25, 95%, 24%)",
            ]),
            accent: "hsl(217, 91%, 60%)",
            sidebar_style: SidebarStyle::Light,
            metadata: PortalMetadata {
                name: "Reseller Portal",
                short_name: "Reseller",
                description: "Sign up and support customers on behalf of an ISP",
                icon: "💼",
                user_type: "reseller",
            },
            font_size: FontScale::standard(),
            spacing: SpacingScale::standard(),
            animations: AnimationProfile::smooth(),
        },
        PortalProfile {
            id: PortalId::IspCustomer,
            primary: ColorScale::new([
                "hsl(262, 83%, 97%)",
                "hsl(262, 83%, 94%)",
                "hsl(262, 83%, 88%)",
                "hsl(262, 83%, 79%)",
                "hsl(262, 83%, 68%)",
                "hsl(262, 83%, 58%)",
                "hsl(262, 83%, 50%)",
                "hsl(262, 83%, 42%)",
                "hsl(262, 83%, 35%)",
                "hsl(262, 83%, 28%)",
            ]),
            accent: "hsl(142, 71%, 45%)",
            sidebar_style: SidebarStyle::None,
            metadata: PortalMetadata {
                name: "Customer Portal",
                short_name: "My Account",
                description: "Pay bills, check usage and get support",
                icon: "🏠",
                user_type: "customer",
            },
            font_size: FontScale::comfortable(),
            spacing: SpacingScale::relaxed(),
            animations: AnimationProfile::playful(),
        },
    ]
});

/// Get the profile of a portal. Total over [PortalId].
pub fn get_profile(portal: PortalId) -> &'static PortalProfile {
    // CATALOG is declared in PortalId::ALL order.
    &CATALOG[portal as usize]
}

/// Look up a profile by portal key, failing loudly for unknown keys.
pub fn profile_by_key(key: &str) -> ThemeResult<&'static PortalProfile> {
    PortalId::parse_key(key).map(get_profile)
}

/// Iterate all profiles in catalog order.
pub fn profiles() -> impl Iterator<Item = &'static PortalProfile> {
    CATALOG.iter()
}
