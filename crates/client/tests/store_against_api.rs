use catalog_api::{AppServices, build_app};
use catalog_client::{ActionResult, HttpProductsApi, ProductStore, ProductsApi};
use catalog_core::ProductId;
use catalog_products::{NewProduct, ProductPatch};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        let app = build_app(AppServices::in_memory());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn pen_scenario_keeps_store_in_step_with_server() {
    let srv = TestServer::spawn().await;
    let mut store = ProductStore::new(HttpProductsApi::new(&srv.base_url));

    let result = store
        .create_product(NewProduct::new("Pen", 2.0, "http://x/p.png"))
        .await;
    assert_eq!(result, ActionResult::ok("Product created successfully"));
    let id = store.products()[0].id;

    // A second store sees the same record after fetching.
    let mut other = ProductStore::new(HttpProductsApi::new(&srv.base_url));
    assert!(other.fetch_products().await.success);
    assert_eq!(other.products(), store.products());

    let result = store
        .update_product(id, ProductPatch::default().price(3.0))
        .await;
    assert_eq!(result, ActionResult::ok("Product updated successfully"));
    assert_eq!(store.products()[0].price, 3.0);
    assert_eq!(store.products()[0].id, id);

    let result = store.delete_product(id).await;
    assert_eq!(result, ActionResult::ok("product deleted"));
    assert!(store.products().is_empty());

    let remote = store.api().list().await.unwrap();
    assert!(remote.is_empty());
}

#[tokio::test]
async fn server_messages_reach_the_caller() {
    let srv = TestServer::spawn().await;
    let mut store = ProductStore::new(HttpProductsApi::new(&srv.base_url));

    let result = store.delete_product(ProductId::new()).await;
    assert_eq!(result, ActionResult::failed("Product not found"));

    let result = store
        .update_product(ProductId::new(), ProductPatch::default().name("x"))
        .await;
    assert_eq!(result, ActionResult::failed("Product not found"));

    // Bypasses the local check so the server's 400 comes back.
    let err = store
        .api()
        .create(&NewProduct::new("Pen", 0.0, "http://x/p.png"))
        .await
        .unwrap_err();
    assert!(err.message().starts_with("please provide all fields"));
}
