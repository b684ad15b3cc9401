use netreq::{network_request, Codable, HttpClient};
use serde::{Deserialize, Serialize};

#[network_request(url = "/get")]
#[derive(Codable, Serialize, Deserialize, Debug)]
struct NetworkResponse {
    url: String,
}

#[tokio::main]
async fn main() -> netreq::Result<()> {
    let client = HttpClient::with_endpoint("https://httpbin.org")?;
    let res = NetworkResponse::get_request_with(&client).await?;
    println!("GET /get => url={}", res.url);
    Ok(())
}
