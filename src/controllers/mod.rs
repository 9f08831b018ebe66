pub mod auth_controller;
pub mod fleet_controller;
pub mod line_controller;
pub mod mode_controller;
pub mod planner_controller;
pub mod report_controller;
pub mod what_if_controller;
