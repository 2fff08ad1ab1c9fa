#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use testcontainers::runners::AsyncRunner;
use testcontainers::ContainerAsync;
use testcontainers_modules::minio::MinIO;
use testcontainers_modules::mongo::Mongo;

use vitrine::models::User;
use vitrine::state::AppState;
use vitrine::storage::S3BlobStore;

pub const JWT_SECRET: &str = "test-secret";
pub const OWNER: &str = "owner-1";
pub const OTHER_OWNER: &str = "owner-2";
const BUCKET: &str = "vitrine-test";

/// Holds running containers and the wired router for integration tests.
///
/// Containers stay alive as long as this struct does and are cleaned up on
/// drop.
pub struct TestEnv {
    _mongo: ContainerAsync<Mongo>,
    _minio: ContainerAsync<MinIO>,
    pub router: Router,
    pub db: mongodb::Database,
    pub s3: aws_sdk_s3::Client,
    pub public_base: String,
}

impl TestEnv {
    /// Spin up Mongo + MinIO and build a router wired to real backends.
    pub async fn start() -> Self {
        let (mongo_container, minio_container) =
            tokio::join!(Mongo::default().start(), MinIO::default().start());
        let mongo_container = mongo_container.expect("Failed to start MongoDB container");
        let minio_container = minio_container.expect("Failed to start MinIO container");

        // --- MongoDB ---
        let mongo_port = mongo_container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get MongoDB port");
        let mongo_uri = format!("mongodb://127.0.0.1:{mongo_port}");
        let mongo_client = mongodb::Client::with_uri_str(&mongo_uri)
            .await
            .expect("Failed to connect to MongoDB");
        let db = mongo_client.database("vitrine_test");

        // --- MinIO (S3) ---
        let minio_port = minio_container
            .get_host_port_ipv4(9000)
            .await
            .expect("Failed to get MinIO port");
        let minio_endpoint = format!("http://127.0.0.1:{minio_port}");

        std::env::set_var("AWS_ACCESS_KEY_ID", "minioadmin");
        std::env::set_var("AWS_SECRET_ACCESS_KEY", "minioadmin");
        std::env::set_var("AWS_REGION", "us-east-1");

        let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .endpoint_url(&minio_endpoint)
            .region(aws_config::Region::new("us-east-1"))
            .load()
            .await;
        let s3 = aws_sdk_s3::Client::from_conf(
            aws_sdk_s3::config::Builder::from(&s3_config)
                .force_path_style(true)
                .build(),
        );
        s3.create_bucket()
            .bucket(BUCKET)
            .send()
            .await
            .expect("Failed to create test bucket");

        let public_base = format!("{minio_endpoint}/{BUCKET}");
        let blobs = Arc::new(S3BlobStore::new(
            s3.clone(),
            BUCKET.to_string(),
            public_base.clone(),
        ));

        // --- AppState + router ---
        let state = AppState::new(&db, blobs, JWT_SECRET.to_string());
        let router = vitrine::routes::router(state);

        let env = Self {
            _mongo: mongo_container,
            _minio: minio_container,
            router,
            db,
            s3,
            public_base,
        };
        env.seed_owner(OWNER, "owner@example.com").await;
        env.seed_owner(OTHER_OWNER, "other@example.com").await;
        env
    }

    async fn seed_owner(&self, id: &str, email: &str) {
        self.db
            .collection::<User>("users")
            .insert_one(User {
                id: id.to_string(),
                email: email.to_string(),
            })
            .await
            .expect("Failed to seed owner");
    }

    pub fn server(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .expect_success_by_default()
            .build(self.router.clone())
            .expect("Failed to build TestServer")
    }

    /// A server that does NOT expect success by default (for error tests).
    pub fn server_permissive(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .build(self.router.clone())
            .expect("Failed to build TestServer")
    }

    /// Whether an object is still present in the bucket, by public URL.
    pub async fn blob_exists(&self, url: &str) -> bool {
        let key = url
            .strip_prefix(&self.public_base)
            .map(|rest| rest.trim_start_matches('/'))
            .expect("URL outside the test bucket");
        self.s3
            .head_object()
            .bucket(BUCKET)
            .key(key)
            .send()
            .await
            .is_ok()
    }
}

/// Bearer token for the default test owner.
pub fn token() -> String {
    token_for(OWNER)
}

pub fn token_for(owner_id: &str) -> String {
    vitrine::auth::sign_token(owner_id, JWT_SECRET, 3600).expect("Failed to sign test token")
}

/// Minimal valid 1x1 PNG for upload tests.
pub fn png_bytes() -> Vec<u8> {
    vec![
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // PNG signature
        0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR chunk
        0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, // 1x1
        0x08, 0x02, 0x00, 0x00, 0x00, 0x90, 0x77, 0x53, 0xDE, // bit depth, color type, CRC
        0x00, 0x00, 0x00, 0x0C, 0x49, 0x44, 0x41, 0x54, // IDAT chunk
        0x08, 0xD7, 0x63, 0xF8, 0xCF, 0xC0, 0x00, 0x00, // compressed data
        0x00, 0x02, 0x00, 0x01, 0xE2, 0x21, 0xBC, 0x33, // CRC
        0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, // IEND chunk
        0xAE, 0x42, 0x60, 0x82,
    ]
}

/// Small but well-formed-enough PDF payload.
pub fn pdf_bytes() -> Vec<u8> {
    b"%PDF-1.4\n1 0 obj\n<< /Type /Catalog >>\nendobj\ntrailer\n<< /Root 1 0 R >>\n%%EOF\n"
        .to_vec()
}
