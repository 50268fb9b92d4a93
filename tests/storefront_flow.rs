use texpress_core::{
    auth::{Authenticator, PasscodeAuthenticator},
    checkout,
    config::AppConfig,
    describe::{DescribeError, DescribeProduct, FALLBACK_DESCRIPTION},
    dto::{
        auth::SignInRequest,
        products::{CreateProductRequest, UpdateProductRequest},
        reviews::NewReviewRequest,
        settings::UpdateSettingsRequest,
    },
    error::AppError,
    models::{Currency, Language},
    services::{auth_service, cart_service, product_service, review_service, settings_service},
    state::Storefront,
    store::MemoryStore,
};

struct CannedDescriber(&'static str);

impl DescribeProduct for CannedDescriber {
    fn describe(
        &self,
        _name: &str,
        _price_usd: f64,
        _weight_kg: f64,
    ) -> impl Future<Output = Result<String, DescribeError>> + Send {
        let text = self.0.to_string();
        async move { Ok(text) }
    }
}

struct FailingDescriber;

impl DescribeProduct for FailingDescriber {
    fn describe(
        &self,
        _name: &str,
        _price_usd: f64,
        _weight_kg: f64,
    ) -> impl Future<Output = Result<String, DescribeError>> + Send {
        async move { Err(DescribeError::Unavailable("quota exhausted".into())) }
    }
}

fn new_app() -> Storefront<MemoryStore> {
    Storefront::load(MemoryStore::new())
}

fn sign_in_admin(app: &mut Storefront<MemoryStore>) {
    auth_service::sign_in(
        app,
        &PasscodeAuthenticator::default(),
        SignInRequest {
            email: "admin@texpress.shop".into(),
            password: "1212".into(),
        },
    )
    .expect("admin sign-in");
}

fn lamp_request() -> CreateProductRequest {
    CreateProductRequest {
        name: "Desk Lamp".into(),
        price: 100.0,
        weight: 1.2,
        description: Some("A lamp.".into()),
        images: None,
        attributes: None,
    }
}

// Integration flow: admin signs in and builds the catalog -> customer reviews
// and fills the cart -> checkout hand-off -> admin deletes a product and the
// cart follows.
#[tokio::test]
async fn catalog_cart_and_checkout_flow() -> anyhow::Result<()> {
    let mut app = new_app();
    sign_in_admin(&mut app);
    assert!(app.user().is_some_and(|u| u.is_admin));

    let lamp = product_service::create_product(&mut app, &CannedDescriber("unused"), lamp_request())
        .await?;
    let mug = product_service::create_product(
        &mut app,
        &CannedDescriber("A mug to remember."),
        CreateProductRequest {
            name: "Mug".into(),
            price: 20.0,
            weight: 0.4,
            description: None,
            images: None,
            attributes: None,
        },
    )
    .await?;

    // Provided description wins; absent description comes from the provider.
    assert_eq!(lamp.description, "A lamp.");
    assert_eq!(mug.description, "A mug to remember.");
    assert_eq!(mug.images, vec![product_service::PLACEHOLDER_IMAGE.to_string()]);
    assert_eq!(mug.category, "General");
    assert_eq!(app.products().len(), 2);

    // Every add is its own line item, duplicates allowed.
    cart_service::add_to_cart(&mut app, lamp.id);
    cart_service::add_to_cart(&mut app, lamp.id);
    cart_service::add_to_cart(&mut app, mug.id);
    assert_eq!(app.cart_len(), 3);
    assert_eq!(app.cart(), [lamp.id, lamp.id, mug.id]);

    // Out-of-bounds removal is a silent no-op.
    cart_service::remove_from_cart(&mut app, 99);
    assert_eq!(app.cart_len(), 3);
    cart_service::remove_from_cart(&mut app, 1);
    assert_eq!(app.cart(), [lamp.id, mug.id]);

    let review = review_service::add_review(
        &mut app,
        lamp.id,
        NewReviewRequest {
            rating: 4,
            comment: "Great!".into(),
        },
    )?
    .expect("product exists");
    assert_eq!(review.user_name, "admin");
    assert_eq!(review.user_id, "admin@texpress.shop");

    let handoff = checkout::checkout_cart(&app, checkout::DEFAULT_RECIPIENT)
        .expect("cart is not empty");
    assert!(handoff.message.contains("- Desk Lamp ($100)"));
    assert!(handoff.message.contains("- Mug ($20)"));
    assert!(handoff.message.contains("Total: $120"));

    // Deleting a product also drops its cart lines.
    assert!(product_service::delete_product(&mut app, lamp.id));
    assert_eq!(app.cart(), [mug.id]);
    assert!(app.product(lamp.id).is_none());
    assert!(!product_service::delete_product(&mut app, lamp.id));

    Ok(())
}

#[tokio::test]
async fn provider_failure_falls_back_to_fixed_description() -> anyhow::Result<()> {
    let mut app = new_app();
    let product = product_service::create_product(
        &mut app,
        &FailingDescriber,
        CreateProductRequest {
            name: "Scarf".into(),
            price: 35.0,
            weight: 0.2,
            description: None,
            images: None,
            attributes: None,
        },
    )
    .await?;
    assert_eq!(product.description, FALLBACK_DESCRIPTION);
    Ok(())
}

#[tokio::test]
async fn review_validation_rejects_without_touching_state() -> anyhow::Result<()> {
    let mut app = new_app();
    sign_in_admin(&mut app);
    let lamp =
        product_service::create_product(&mut app, &CannedDescriber("unused"), lamp_request())
            .await?;

    // Blank comment.
    let err = review_service::add_review(
        &mut app,
        lamp.id,
        NewReviewRequest {
            rating: 5,
            comment: "   ".into(),
        },
    )
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    // Rating outside [1, 5].
    let err = review_service::add_review(
        &mut app,
        lamp.id,
        NewReviewRequest {
            rating: 6,
            comment: "Great!".into(),
        },
    )
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    // No signed-in author: the caller is told to prompt for sign-in.
    auth_service::sign_out(&mut app);
    let err = review_service::add_review(
        &mut app,
        lamp.id,
        NewReviewRequest {
            rating: 5,
            comment: "Great!".into(),
        },
    )
    .unwrap_err();
    assert!(matches!(err, AppError::SignInRequired));

    assert!(app.product(lamp.id).expect("still there").reviews.is_empty());
    Ok(())
}

#[tokio::test]
async fn reviews_are_prepended_newest_first() -> anyhow::Result<()> {
    let mut app = new_app();
    sign_in_admin(&mut app);
    let lamp =
        product_service::create_product(&mut app, &CannedDescriber("unused"), lamp_request())
            .await?;

    review_service::add_review(
        &mut app,
        lamp.id,
        NewReviewRequest {
            rating: 3,
            comment: "first".into(),
        },
    )?;
    review_service::add_review(
        &mut app,
        lamp.id,
        NewReviewRequest {
            rating: 5,
            comment: "second".into(),
        },
    )?;

    let reviews = &app.product(lamp.id).expect("still there").reviews;
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].comment, "second");
    assert_eq!(reviews[1].comment, "first");

    // Stale product id: no-op, not an error.
    let outcome = review_service::add_review(
        &mut app,
        uuid::Uuid::new_v4(),
        NewReviewRequest {
            rating: 5,
            comment: "lost".into(),
        },
    )?;
    assert!(outcome.is_none());
    Ok(())
}

#[tokio::test]
async fn edit_merges_only_the_given_fields() -> anyhow::Result<()> {
    let mut app = new_app();
    sign_in_admin(&mut app);
    let lamp =
        product_service::create_product(&mut app, &CannedDescriber("unused"), lamp_request())
            .await?;

    let updated = product_service::edit_product(
        &mut app,
        lamp.id,
        UpdateProductRequest {
            price: Some(50.0),
            ..UpdateProductRequest::default()
        },
    )?
    .expect("product exists");

    assert_eq!(updated.price, 50.0);
    assert_eq!(updated.name, lamp.name);
    assert_eq!(updated.images, lamp.images);
    assert_eq!(updated.reviews, lamp.reviews);

    // Stale id: no-op, not an error.
    let missing = product_service::edit_product(
        &mut app,
        uuid::Uuid::new_v4(),
        UpdateProductRequest::default(),
    )?;
    assert!(missing.is_none());
    Ok(())
}

#[test]
fn sign_in_rejects_empty_credentials() {
    let mut app = new_app();
    let err = auth_service::sign_in(
        &mut app,
        &PasscodeAuthenticator::default(),
        SignInRequest {
            email: String::new(),
            password: "1212".into(),
        },
    )
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    assert!(app.user().is_none());
}

#[test]
fn wrong_passcode_signs_in_without_admin() {
    let mut app = new_app();
    let auth = PasscodeAuthenticator::new("s3cret");
    assert!(auth.grant_admin("a@b.c", "s3cret"));

    let user = auth_service::sign_in(
        &mut app,
        &auth,
        SignInRequest {
            email: "shopper@example.com".into(),
            password: "guess".into(),
        },
    )
    .expect("sign-in succeeds even without the passcode");
    assert!(!user.is_admin);
}

#[test]
fn settings_merge_and_persist() {
    let mut app = new_app();
    let settings = settings_service::update_settings(
        &mut app,
        UpdateSettingsRequest {
            currency: Some(Currency::CAD),
            ..UpdateSettingsRequest::default()
        },
    );
    assert_eq!(settings.currency, Currency::CAD);
    assert_eq!(settings.language, Language::English);
    assert!(!settings.is_dark_mode);

    let settings = settings_service::update_settings(
        &mut app,
        UpdateSettingsRequest {
            language: Some(Language::Arabic),
            is_dark_mode: Some(true),
            ..UpdateSettingsRequest::default()
        },
    );
    assert_eq!(settings.currency, Currency::CAD);
    assert_eq!(settings.language, Language::Arabic);
    assert!(settings.is_dark_mode);
}

#[tokio::test]
async fn dangling_cart_ids_are_filtered_at_read_time() -> anyhow::Result<()> {
    let mut app = new_app();
    sign_in_admin(&mut app);
    let lamp =
        product_service::create_product(&mut app, &CannedDescriber("unused"), lamp_request())
            .await?;

    cart_service::add_to_cart(&mut app, lamp.id);
    // Simulate a stale entry surviving in storage.
    cart_service::add_to_cart(&mut app, uuid::Uuid::new_v4());

    assert_eq!(app.cart_len(), 2);
    let resolved = app.cart_products();
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].id, lamp.id);

    assert!(checkout::checkout_cart(&app, "khaled.et.9").is_some());
    Ok(())
}

#[test]
fn env_defaults_wire_up_a_working_gate() {
    let config = AppConfig::from_env();
    assert_eq!(config.checkout_recipient, checkout::DEFAULT_RECIPIENT);

    let auth = PasscodeAuthenticator::new(config.admin_passcode);
    let mut app = new_app();
    let user = auth_service::sign_in(
        &mut app,
        &auth,
        SignInRequest {
            email: "admin@texpress.shop".into(),
            password: "1212".into(),
        },
    )
    .expect("default passcode grants admin");
    assert!(user.is_admin);
}

#[test]
fn empty_cart_has_no_checkout_handoff() {
    let app = new_app();
    assert!(checkout::checkout_cart(&app, checkout::DEFAULT_RECIPIENT).is_none());
}

// A fresh session built on the same store sees exactly the state the previous
// one persisted.
#[tokio::test]
async fn state_survives_a_reload_from_the_same_store() -> anyhow::Result<()> {
    let mut app = new_app();
    sign_in_admin(&mut app);
    let lamp =
        product_service::create_product(&mut app, &CannedDescriber("unused"), lamp_request())
            .await?;
    cart_service::add_to_cart(&mut app, lamp.id);
    settings_service::update_settings(
        &mut app,
        UpdateSettingsRequest {
            currency: Some(Currency::CAD),
            is_dark_mode: Some(true),
            ..UpdateSettingsRequest::default()
        },
    );

    let reloaded = Storefront::load(app.into_store());
    assert_eq!(reloaded.products().len(), 1);
    assert_eq!(reloaded.products()[0], lamp);
    assert_eq!(reloaded.cart(), [lamp.id]);
    assert!(reloaded.user().is_some_and(|u| u.is_admin));
    assert_eq!(reloaded.settings().currency, Currency::CAD);
    assert!(reloaded.settings().is_dark_mode);

    // Sign-out persists as an absent user.
    let mut reloaded = reloaded;
    auth_service::sign_out(&mut reloaded);
    let reloaded = Storefront::load(reloaded.into_store());
    assert!(reloaded.user().is_none());
    Ok(())
}
