use serde::Serialize;

/// 商品列表响应信封，count 恒等于 data 的长度
#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    #[serde(rename = "type")]
    pub response_type: &'static str,
    pub code: u16,
    pub count: usize,
    pub data: Vec<serde_json::Value>,
}

impl ProductsResponse {
    pub fn succeed(data: Vec<serde_json::Value>) -> Self {
        ProductsResponse {
            response_type: "succeed",
            code: 200,
            count: data.len(),
            data,
        }
    }
}
