/// Default simulation ID handed to the simulator renderer
pub const DEFAULT_SIMULATION_ID: &str = "f64c34f79f4b7994";

/// Address substring that marks a local development host
pub const DEFAULT_LOCAL_MARKER: &str = "localhost";

/// Default deployment environment tag
pub const DEFAULT_DEPLOYMENT_ENV: &str = "edge";

/// UI entry URL used when the page address is unknown
pub const DEFAULT_UI_URL: &str = "http://localhost:3000/";
