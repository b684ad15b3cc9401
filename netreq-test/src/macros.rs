use netreq::{network_request, Codable};
use serde::{Deserialize, Serialize};

#[network_request]
#[derive(Codable, Serialize, Deserialize, Debug, PartialEq)]
pub struct NetworkResponse {
    pub id: String,
}

#[network_request(url = "/users/1", name = "fetch")]
#[derive(netreq::Codable, Serialize, Deserialize, Debug, PartialEq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub args: Option<crate::Args>,
}

#[derive(Codable, Serialize, Deserialize, Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
}
