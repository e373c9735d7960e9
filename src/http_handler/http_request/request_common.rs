use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_response::response_common::{HTTPResponseType, ResponseError};

pub(crate) trait HTTPRequestType {
    type Response: HTTPResponseType;

    fn endpoint(&self) -> &'static str;

    fn header_params(&self) -> reqwest::header::HeaderMap {
        reqwest::header::HeaderMap::default()
    }
}

/// Request types without a body, sent as plain GETs against their endpoint.
pub(crate) trait NoBodyHTTPRequestType: HTTPRequestType {
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, ResponseError> {
        let url = format!("{}{}", client.url(), self.endpoint());
        let response = client.client().get(url).headers(self.header_params()).send().await?;
        <Self::Response as HTTPResponseType>::read_response(response).await
    }
}
