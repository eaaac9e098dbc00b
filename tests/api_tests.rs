use actix_web::{
    App,
    body::MessageBody,
    dev::ServiceResponse,
    http::StatusCode,
    test::{self, TestRequest},
};
use fixitbot::db::Store;
use fixitbot::models::utilisateur;
use fixitbot::routes::configure_app;
use fixitbot::utils::password::{PasswordHasher, verify_password};
use sea_orm::EntityTrait;
use serde_json::{Value, json};

// Peu d'itérations: on teste le format, pas la résistance du hash
const TEST_ITERATIONS: u32 = 1_000;

macro_rules! spawn_app {
    () => {{
        let store = Store::in_memory().await.expect("in-memory store");
        let app = test::init_service(
            App::new().configure(configure_app(store.clone(), PasswordHasher::new(TEST_ITERATIONS))),
        )
        .await;
        (app, store)
    }};
}

macro_rules! call {
    ($app:expr, $req:expr) => {
        into_parts(test::call_service(&$app, $req.to_request()).await).await
    };
}

async fn into_parts<B: MessageBody>(resp: ServiceResponse<B>) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = test::read_body(resp).await;
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post(uri: &str, body: Value) -> TestRequest {
    TestRequest::post().uri(uri).set_json(body)
}

fn put(uri: &str, body: Value) -> TestRequest {
    TestRequest::put().uri(uri).set_json(body)
}

fn get(uri: &str) -> TestRequest {
    TestRequest::get().uri(uri)
}

fn delete(uri: &str) -> TestRequest {
    TestRequest::delete().uri(uri)
}

#[actix_web::test]
async fn test_index_and_health() {
    let (app, _store) = spawn_app!();

    let (status, body) = call!(app, get("/"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Welcome to the FixItBot API");

    let (status, body) = call!(app, get("/health"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}

#[actix_web::test]
async fn test_create_and_get_user_hides_password() {
    let (app, store) = spawn_app!();

    let (status, body) = call!(
        app,
        post("/users", json!({"nom": "Alice", "email": "alice@x.com", "mdp": "secret"}))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Utilisateur créé avec succès");
    assert!(body["data"].get("mdp").is_none());
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = call!(app, get(&format!("/users/{}", id)));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nom"], "Alice");
    assert_eq!(body["email"], "alice@x.com");
    assert!(body.get("mdp").is_none());

    let (_, list) = call!(app, get("/users"));
    assert!(list.as_array().unwrap().iter().all(|u| u.get("mdp").is_none()));

    // Le hash stocké est vérifiable et n'est pas le mot de passe en clair
    let stored = utilisateur::Entity::find_by_id(id as i32)
        .one(store.conn())
        .await
        .unwrap()
        .unwrap();
    assert_ne!(stored.mdp, "secret");
    assert!(verify_password("secret", &stored.mdp).unwrap());
}

#[actix_web::test]
async fn test_duplicate_email_is_rejected() {
    let (app, _store) = spawn_app!();

    let user = json!({"nom": "A", "email": "dup@x.com", "mdp": "p"});
    let (status, _) = call!(app, post("/users", user.clone()));
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = call!(app, post("/users", json!({"nom": "B", "email": "dup@x.com", "mdp": "q"})));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (_, list) = call!(app, get("/users"));
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_missing_field_is_bad_request() {
    let (app, _store) = spawn_app!();

    let (status, body) = call!(app, post("/users", json!({"nom": "A", "email": "a@x.com"})));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("mdp"));

    let (status, _) = call!(app, post("/errors", json!({"description": ""})));
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_unknown_ids_are_not_found() {
    let (app, _store) = spawn_app!();

    for uri in [
        "/users/42",
        "/conversations/42",
        "/messages/42",
        "/errors/42",
        "/solutions/42",
        "/tools/42",
        "/error-tools/42/43",
        "/error-solutions/42",
        "/interaction-logs/42",
        "/requests/42",
        "/errors/42/tools",
        "/errors/42/solutions",
    ] {
        let (status, _) = call!(app, get(uri));
        assert_eq!(status, StatusCode::NOT_FOUND, "GET {}", uri);
    }

    let (status, _) = call!(app, put("/users/42", json!({"nom": "X"})));
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = call!(app, put("/messages/42", json!({"message": "X"})));
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_then_get_and_delete_again() {
    let (app, _store) = spawn_app!();

    let (_, body) = call!(app, post("/solutions", json!({"description": "Redémarrer"})));
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = call!(app, delete(&format!("/solutions/{}", id)));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Solution supprimée avec succès");

    let (status, _) = call!(app, get(&format!("/solutions/{}", id)));
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call!(app, delete(&format!("/solutions/{}", id)));
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_partial_user_update_keeps_other_fields() {
    let (app, store) = spawn_app!();

    let (_, body) = call!(app, post("/users", json!({"nom": "Old", "email": "o@x.com", "mdp": "pw"})));
    let id = body["data"]["id"].as_i64().unwrap() as i32;
    let before = utilisateur::Entity::find_by_id(id).one(store.conn()).await.unwrap().unwrap();

    let (status, body) = call!(app, put(&format!("/users/{}", id), json!({"nom": "New Name"})));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Utilisateur mis à jour avec succès");

    let after = utilisateur::Entity::find_by_id(id).one(store.conn()).await.unwrap().unwrap();
    assert_eq!(after.nom, "New Name");
    assert_eq!(after.email, "o@x.com");
    assert_eq!(after.mdp, before.mdp);

    // Un nouveau mdp est re-hashé
    let (status, _) = call!(app, put(&format!("/users/{}", id), json!({"mdp": "other"})));
    assert_eq!(status, StatusCode::OK);
    let rehashed = utilisateur::Entity::find_by_id(id).one(store.conn()).await.unwrap().unwrap();
    assert_ne!(rehashed.mdp, before.mdp);
    assert!(verify_password("other", &rehashed.mdp).unwrap());

    let (status, _) = call!(app, put(&format!("/users/{}", id), json!({})));
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn test_update_to_taken_email_is_rejected() {
    let (app, _store) = spawn_app!();

    call!(app, post("/users", json!({"nom": "A", "email": "a@x.com", "mdp": "p"})));
    let (_, body) = call!(app, post("/users", json!({"nom": "B", "email": "b@x.com", "mdp": "p"})));
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, _) = call!(app, put(&format!("/users/{}", id), json!({"email": "a@x.com"})));
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, user) = call!(app, get(&format!("/users/{}", id)));
    assert_eq!(user["email"], "b@x.com");
}

#[actix_web::test]
async fn test_message_requires_conversation_and_valid_sender() {
    let (app, _store) = spawn_app!();

    let (status, body) = call!(
        app,
        post("/messages", json!({"conversation_id": 1, "sender": "user", "message": "hi"}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("conversation"));

    call!(app, post("/users", json!({"nom": "A", "email": "a@x.com", "mdp": "p"})));
    let (status, _) = call!(app, post("/conversations", json!({"utilisateur_id": 1})));
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = call!(
        app,
        post("/messages", json!({"conversation_id": 1, "sender": "admin", "message": "hi"}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call!(
        app,
        post("/messages", json!({"conversation_id": 1, "sender": "bot", "message": "bonjour"}))
    );
    assert_eq!(status, StatusCode::CREATED);
}

#[actix_web::test]
async fn test_conversation_requires_existing_user() {
    let (app, _store) = spawn_app!();

    let (status, _) = call!(app, post("/conversations", json!({"utilisateur_id": 7})));
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = call!(app, get("/conversations"));
    assert_eq!(list, json!([]));
}

#[actix_web::test]
async fn test_end_to_end_conversation() {
    let (app, _store) = spawn_app!();

    let (status, _) = call!(app, post("/users", json!({"nom": "A", "email": "a@x.com", "mdp": "p"})));
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = call!(app, post("/conversations", json!({"utilisateur_id": 1})));
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["utilisateur_id"], 1);
    assert!(body["data"]["timestamp"].is_string());

    let (status, _) = call!(
        app,
        post("/messages", json!({"conversation_id": 1, "sender": "user", "message": "hi"}))
    );
    assert_eq!(status, StatusCode::CREATED);

    let (status, messages) = call!(app, get("/messages"));
    assert_eq!(status, StatusCode::OK);
    let messages = messages.as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["conversation_id"], 1);
    assert_eq!(messages[0]["sender"], "user");
    assert_eq!(messages[0]["message"], "hi");
}

#[actix_web::test]
async fn test_message_update() {
    let (app, _store) = spawn_app!();

    call!(app, post("/users", json!({"nom": "A", "email": "a@x.com", "mdp": "p"})));
    call!(app, post("/conversations", json!({"utilisateur_id": 1})));
    let (_, body) = call!(
        app,
        post("/messages", json!({"conversation_id": 1, "sender": "user", "message": "hi"}))
    );
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, _) = call!(app, put(&format!("/messages/{}", id), json!({"sender": "bot"})));
    assert_eq!(status, StatusCode::OK);

    let (_, message) = call!(app, get(&format!("/messages/{}", id)));
    assert_eq!(message["sender"], "bot");
    assert_eq!(message["message"], "hi");

    let (status, _) = call!(app, put(&format!("/messages/{}", id), json!({"sender": "robot"})));
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_parent_with_dependents_cannot_be_deleted() {
    let (app, _store) = spawn_app!();

    call!(app, post("/users", json!({"nom": "A", "email": "a@x.com", "mdp": "p"})));
    call!(app, post("/conversations", json!({"utilisateur_id": 1})));

    let (status, _) = call!(app, delete("/users/1"));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = call!(app, get("/users/1"));
    assert_eq!(status, StatusCode::OK);

    // Une fois la conversation supprimée, l'utilisateur peut l'être
    let (status, _) = call!(app, delete("/conversations/1"));
    assert_eq!(status, StatusCode::OK);
    let (status, _) = call!(app, delete("/users/1"));
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn test_tools_and_error_links() {
    let (app, _store) = spawn_app!();

    let (_, erreur) = call!(app, post("/errors", json!({"description": "Écran bleu"})));
    let erreur_id = erreur["data"]["id"].as_i64().unwrap();

    let (status, outil) = call!(app, post("/tools", json!({"nom": "Tournevis"})));
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(outil["data"]["description"], Value::Null);
    let outil_id = outil["data"]["id"].as_i64().unwrap();

    let (_, solution) = call!(app, post("/solutions", json!({"description": "Mettre à jour les pilotes"})));
    let solution_id = solution["data"]["id"].as_i64().unwrap();

    let link = json!({"erreur_id": erreur_id, "outil_id": outil_id});
    let (status, _) = call!(app, post("/error-tools", link.clone()));
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = call!(app, post("/error-tools", link));
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call!(app, post("/error-tools", json!({"erreur_id": erreur_id, "outil_id": 99})));
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = call!(
        app,
        post("/error-solutions", json!({"erreur_id": erreur_id, "solution_id": solution_id}))
    );
    assert_eq!(status, StatusCode::CREATED);
    let link_id = body["data"]["id"].as_i64().unwrap();

    let (_, tools) = call!(app, get(&format!("/errors/{}/tools", erreur_id)));
    assert_eq!(tools[0]["nom"], "Tournevis");
    let (_, solutions) = call!(app, get(&format!("/errors/{}/solutions", erreur_id)));
    assert_eq!(solutions[0]["description"], "Mettre à jour les pilotes");

    let (status, _) = call!(app, get(&format!("/error-tools/{}/{}", erreur_id, outil_id)));
    assert_eq!(status, StatusCode::OK);

    // Outil encore lié: suppression refusée
    let (status, _) = call!(app, delete(&format!("/tools/{}", outil_id)));
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call!(app, delete(&format!("/error-tools/{}/{}", erreur_id, outil_id)));
    assert_eq!(status, StatusCode::OK);
    let (status, _) = call!(app, delete(&format!("/error-tools/{}/{}", erreur_id, outil_id)));
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = call!(app, delete(&format!("/tools/{}", outil_id)));
    assert_eq!(status, StatusCode::OK);

    let (status, _) = call!(app, delete(&format!("/error-solutions/{}", link_id)));
    assert_eq!(status, StatusCode::OK);
    let (_, solutions) = call!(app, get(&format!("/errors/{}/solutions", erreur_id)));
    assert_eq!(solutions, json!([]));
}

#[actix_web::test]
async fn test_interaction_logs_are_append_only() {
    let (app, _store) = spawn_app!();

    call!(app, post("/users", json!({"nom": "A", "email": "a@x.com", "mdp": "p"})));

    let (status, body) = call!(app, post("/interaction-logs", json!({"utilisateur_id": 1, "action": "login"})));
    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, _) = call!(app, delete(&format!("/interaction-logs/{}", id)));
    assert!(status.is_client_error());

    let (status, log) = call!(app, get(&format!("/interaction-logs/{}", id)));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(log["action"], "login");

    let (status, _) = call!(app, post("/interaction-logs", json!({"utilisateur_id": 5, "action": "login"})));
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_requests_crud() {
    let (app, _store) = spawn_app!();

    call!(app, post("/users", json!({"nom": "A", "email": "a@x.com", "mdp": "p"})));

    let (status, body) = call!(
        app,
        post("/requests", json!({"utilisateur_id": 1, "description": "Le wifi ne marche plus"}))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Requête créée avec succès");
    let id = body["data"]["id"].as_i64().unwrap();

    let (_, list) = call!(app, get("/requests"));
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, _) = call!(app, delete(&format!("/requests/{}", id)));
    assert_eq!(status, StatusCode::OK);
    let (status, _) = call!(app, get(&format!("/requests/{}", id)));
    assert_eq!(status, StatusCode::NOT_FOUND);
}
