mod helpers;

use helpers::setup::spawn_app;

#[actix_web::test]
async fn test_health_check() {
    let (_, sdk, _) = spawn_app().await;
    let res = sdk
        .status
        .check_health()
        .await
        .expect("Expected the health check to respond");
    assert_eq!(res.status, "healthy");
}

#[actix_web::test]
async fn test_get_message() {
    let (app, sdk, _) = spawn_app().await;
    let res = sdk
        .message
        .get()
        .await
        .expect("Expected to get the configured message");
    assert_eq!(res.message, app.config.message);
}

#[actix_web::test]
async fn test_get_message_repeated_invocations() {
    let (_, sdk, _) = spawn_app().await;
    for _ in 0..3 {
        let res = sdk.message.get().await;
        assert!(res.is_ok());
    }
}
