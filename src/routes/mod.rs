pub mod auth_routes;
pub mod dashboard_routes;
pub mod fleet_routes;
pub mod job_card_routes;
pub mod line_routes;
pub mod mode_routes;
pub mod planner_routes;
pub mod report_routes;
pub mod what_if_routes;
