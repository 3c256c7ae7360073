use hello_record_lambda::handlers::put_record::handle_request;
use hello_record_lambda::runtime::contract::InvocationResponse;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn handle(event: LambdaEvent<Value>) -> Result<InvocationResponse, Error> {
    handle_request(event).await.map_err(Error::from)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::tracing::init_default_subscriber();

    lambda_runtime::run(service_fn(handle)).await
}
