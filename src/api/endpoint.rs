pub type Endpoint = str;

pub const ROOT: &Endpoint = "/";
pub const REAL_TIME_DATA: &Endpoint = "/api/realTimeData.htm";

pub const READ_REAL_TIME_DATA: &str = "optType=ReadRealTimeData";

/// Spoofed origin accepted by dongles that refuse requests coming from the LAN.
pub const X_FORWARDED_FOR: (&str, &str) = ("X-Forwarded-For", "5.8.8.8");
