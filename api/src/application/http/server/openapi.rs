use utoipa::OpenApi;

use crate::application::http::{
    block::router::BlockApiDoc, delegate::router::DelegateApiDoc, loader::router::LoaderApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "blockdb",
        description = "Read-only access to the blocks stored by a node."
    ),
    nest(
        (path = "/loader", api = LoaderApiDoc),
        (path = "/blocks", api = BlockApiDoc),
        (path = "/delegates", api = DelegateApiDoc),
    )
)]
pub struct ApiDoc;
