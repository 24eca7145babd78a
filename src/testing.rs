use std::fs;
use std::path::PathBuf;

pub fn read_resource(filename: &str) -> String {
    let mut d = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    d.push(format!("resources/test/{}", filename));
    fs::read_to_string(d.as_path()).unwrap()
}

/// Host and port a mock server listens on.
pub fn mock_address(server: &mockito::Server) -> (String, u16) {
    let host_with_port = server.host_with_port();
    let (host, port) = host_with_port.rsplit_once(':').unwrap();
    (host.to_string(), port.parse().unwrap())
}
