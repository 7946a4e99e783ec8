use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct DiagnosisDoc {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}

#[derive(ToSchema, serde::Serialize)]
pub struct ProductDoc {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub sku: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
    pub image: Option<String>,
}

#[derive(ToSchema)]
pub struct ContactInquiryDoc {
    pub name: String,
    pub email: String,
    pub message: String,
    pub language: Option<String>,
}

#[derive(ToSchema)]
pub struct OrderItemDoc {
    pub sku: String,
    pub title: String,
    pub price: f64,
    pub quantity: u32,
}

#[derive(ToSchema)]
pub struct OrderDoc {
    pub items: Vec<OrderItemDoc>,
    pub customer_name: String,
    pub customer_email: String,
    pub note: Option<String>,
    pub currency: Option<String>,
    pub total: f64,
}

#[derive(ToSchema)]
pub struct SubmissionDoc { pub status: String, pub id: Option<String>, pub stored: bool }

#[derive(ToSchema)]
pub struct OrderReceiptDoc { pub status: String, pub id: Option<String>, pub stored: bool, pub total: f64 }

#[derive(ToSchema)]
pub struct FieldErrorDoc { pub field: String, pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc {
    pub error: String,
    pub detail: Option<String>,
    pub fields: Option<Vec<FieldErrorDoc>>,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Atelier API"),
    paths(
        crate::routes::system::root,
        crate::routes::system::health,
        crate::routes::system::diagnostics,
        crate::routes::products::list,
        crate::routes::submissions::contact,
        crate::routes::submissions::order,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            DiagnosisDoc,
            ProductDoc,
            ContactInquiryDoc,
            OrderItemDoc,
            OrderDoc,
            SubmissionDoc,
            OrderReceiptDoc,
            FieldErrorDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "system"),
        (name = "catalog"),
        (name = "submissions")
    )
)]
pub struct ApiDoc;
