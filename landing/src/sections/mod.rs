// Landing page sections
// Developed by The TchaPBX Web Team (c)2025

mod api_demo;
mod architecture;
mod dashboard_demo;
mod footer;
mod ha_architecture;
mod hero;
mod nav;
mod performance;
mod pricing;

pub use api_demo::ApiDemo;
pub use architecture::Architecture;
pub use dashboard_demo::DashboardDemo;
pub use footer::Footer;
pub use ha_architecture::HaArchitecture;
pub use hero::Hero;
pub use nav::Nav;
pub use performance::PerformanceGrid;
pub use pricing::Pricing;
