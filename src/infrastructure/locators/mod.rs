pub mod configured;
pub mod ip_api;

use anyhow::Result;

use crate::domain::models::LocatorBox;
use crate::domain::models::LocatorName;

pub struct LocatorManager {}

impl LocatorManager {
    pub fn get(name: LocatorName) -> Result<LocatorBox> {
        match name {
            LocatorName::Config => return Ok(Box::new(configured::Configured::from_config())),
            LocatorName::Ip => return Ok(Box::new(ip_api::IpApi::from_config()?)),
        }
    }
}
