pub const INSTANCES_URL: &str =
    "https://raw.githubusercontent.com/powdahound/ec2instances.info/master/www/instances.json";
pub const MAP_NAME: &str = "AwsEc2InstanceTypes";
pub const REQUEST_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_TEMPLATE: &str = include_str!("../res/instance_types.go.hbs");

/// Where the instance list comes from. The binary only ever uses the default.
#[derive(Debug, Clone)]
pub struct Config {
    pub url: String,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config { url: INSTANCES_URL.to_string(), timeout_secs: REQUEST_TIMEOUT_SECS }
    }
}
