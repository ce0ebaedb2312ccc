use crate::{
    api::{attendance, chat, employee, hiring, leave_request, session},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::web;
use anyhow::{Context, Result};

pub type Limiter = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

/// Per-IP limits: the agent relay gets its own, tighter budget.
#[derive(Clone)]
pub struct RateLimits {
    pub chat: Limiter,
    pub api: Limiter,
}

impl RateLimits {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            chat: build_limiter(config.rate_chat_per_min).context("invalid RATE_CHAT_PER_MIN")?,
            api: build_limiter(config.rate_api_per_min).context("invalid RATE_API_PER_MIN")?,
        })
    }
}

fn build_limiter(requests_per_min: u32) -> Result<Limiter> {
    let requests_per_min = requests_per_min.max(1);
    let per_ms = (60_000 / requests_per_min as u64).max(1);

    GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .context("rate limiter needs a non-zero period and burst size")
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config, limits: &RateLimits) {
    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(Governor::new(&limits.api))
            .service(
                web::scope("/sessions")
                    // /sessions
                    .service(web::resource("").route(web::post().to(session::create_session)))
                    // /sessions/{id}
                    .service(
                        web::resource("/{session_id}")
                            .route(web::get().to(session::get_session))
                            .route(web::delete().to(session::delete_session)),
                    )
                    // /sessions/{id}/chat
                    .service(
                        web::resource("/{session_id}/chat")
                            .wrap(Governor::new(&limits.chat))
                            .route(web::post().to(chat::send_message)),
                    )
                    .service(
                        web::resource("/{session_id}/messages")
                            .route(web::get().to(session::list_messages)),
                    )
                    // /sessions/{id}/leave
                    .service(
                        web::resource("/{session_id}/leave")
                            .route(web::get().to(leave_request::leave_list)),
                    )
                    .service(
                        web::resource("/{session_id}/leave/{leave_id}/approve")
                            .route(web::post().to(leave_request::approve_leave)),
                    )
                    .service(
                        web::resource("/{session_id}/leave/{leave_id}/reject")
                            .route(web::post().to(leave_request::reject_leave)),
                    )
                    // /sessions/{id}/dialog/...
                    .service(
                        web::resource("/{session_id}/dialog/confirm")
                            .route(web::post().to(leave_request::confirm_action)),
                    )
                    .service(
                        web::resource("/{session_id}/dialog/cancel")
                            .route(web::post().to(leave_request::cancel_action)),
                    )
                    .service(
                        web::resource("/{session_id}/filters")
                            .route(web::put().to(leave_request::set_filters)),
                    )
                    .service(
                        web::resource("/{session_id}/recent-activity")
                            .route(web::get().to(leave_request::recent_activity)),
                    ),
            )
            // sample data catalogue
            .service(web::resource("/employees").route(web::get().to(employee::list_employees)))
            .service(web::resource("/departments").route(web::get().to(employee::list_departments)))
            .service(
                web::scope("/attendance")
                    .service(web::resource("/summary").route(web::get().to(attendance::attendance_summary)))
                    .service(web::resource("/days").route(web::get().to(attendance::attendance_days))),
            )
            .service(web::resource("/candidates").route(web::get().to(hiring::list_candidates)))
            .service(web::resource("/jobs").route(web::get().to(hiring::list_jobs)))
            .service(web::resource("/interviews").route(web::get().to(hiring::list_interviews))),
    );
}

// SESSION
//  ├─ POST /sessions                → id (fixtures seeded)
//  ├─ POST /sessions/{id}/chat      → agent relay + widget
//  └─ POST /sessions/{id}/leave/{leave_id}/approve
//       └─ POST /sessions/{id}/dialog/confirm | cancel

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{AgentClient, AgentError, contract::{AgentRequest, AgentResponse}};
    use crate::session::SessionStore;
    use actix_web::{App, http::StatusCode, test, web::Data};
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::net::SocketAddr;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    enum Reply {
        Body(Value),
        Fail,
        /// Never answers the first call, then replies with the body.
        StallFirst(Value),
    }

    /// Agent double that records every request it receives.
    struct StubAgent {
        reply: Reply,
        requests: Mutex<Vec<AgentRequest>>,
    }

    impl StubAgent {
        fn with(reply: Reply) -> Arc<Self> {
            Arc::new(Self { reply, requests: Mutex::new(Vec::new()) })
        }

        fn replying(body: Value) -> Arc<Self> {
            Self::with(Reply::Body(body))
        }

        fn failing() -> Arc<Self> {
            Self::with(Reply::Fail)
        }

        fn stalling_first(body: Value) -> Arc<Self> {
            Self::with(Reply::StallFirst(body))
        }

        fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl AgentClient for StubAgent {
        async fn send(&self, request: &AgentRequest) -> Result<AgentResponse, AgentError> {
            let call = {
                let mut requests = self.requests.lock().unwrap();
                requests.push(request.clone());
                requests.len()
            };

            let body = match &self.reply {
                Reply::Body(body) => body,
                Reply::StallFirst(_) if call == 1 => std::future::pending().await,
                Reply::StallFirst(body) => body,
                Reply::Fail => {
                    let err = reqwest::Client::new().get("not a url").build().unwrap_err();
                    return Err(AgentError::Transport(err));
                }
            };
            AgentResponse::from_json(body.clone()).ok_or(AgentError::EmptyBody)
        }
    }

    macro_rules! test_app {
        ($agent:expr) => {{
            let config = Config::default();
            let limits = RateLimits::from_config(&config).unwrap();
            let agent: Arc<dyn AgentClient> = $agent.clone();
            test::init_service(
                App::new()
                    .app_data(Data::new(SessionStore::new(100, Duration::from_secs(60))))
                    .app_data(Data::from(agent))
                    .app_data(Data::new(config.clone()))
                    .configure(|cfg| configure(cfg, &config, &limits)),
            )
            .await
        }};
    }

    fn peer() -> SocketAddr {
        "127.0.0.1:40000".parse().unwrap()
    }

    fn get(uri: &str) -> test::TestRequest {
        test::TestRequest::get().uri(uri).peer_addr(peer())
    }

    fn post(uri: &str) -> test::TestRequest {
        test::TestRequest::post().uri(uri).peer_addr(peer())
    }

    fn leave_inquiry_body() -> Value {
        json!({
            "success": true,
            "response": {
                "result": "You have 5 pending leave requests.",
                "query_type": "leave_inquiry",
                "formatted_data": { "type": "table" },
                "follow_up_suggestions": ["Approve Emma Watson's leave"]
            }
        })
    }

    macro_rules! open_session {
        ($app:expr, $persona:expr) => {{
            let req = post("/api/sessions").set_json(json!({ "persona": $persona })).to_request();
            let created: Value = test::call_and_read_body_json(&$app, req).await;
            created["session_id"].as_str().unwrap().to_string()
        }};
    }

    #[actix_web::test]
    async fn create_session_returns_profile() {
        let agent = StubAgent::failing();
        let app = test_app!(agent);

        let req = post("/api/sessions").set_json(json!({ "persona": "hr" })).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["persona"], "hr");
        assert_eq!(body["profile"]["title"], "HR Assistant Dashboard");

        let id = body["session_id"].as_str().unwrap();
        let view: Value = test::call_and_read_body_json(&app, get(&format!("/api/sessions/{id}")).to_request()).await;
        assert_eq!(view["loading"], false);
        assert_eq!(view["messages"], json!([]));
        assert_eq!(view["dialog"]["state"], "closed");
        assert_eq!(view["recent_activity"].as_array().unwrap().len(), 3);
    }

    #[actix_web::test]
    async fn unknown_persona_is_rejected() {
        let agent = StubAgent::failing();
        let app = test_app!(agent);

        let req = post("/api/sessions").set_json(json!({ "persona": "payroll" })).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn blank_message_never_reaches_agent() {
        let agent = StubAgent::replying(leave_inquiry_body());
        let app = test_app!(agent);
        let id = open_session!(app, "hr");

        let req = post(&format!("/api/sessions/{id}/chat"))
            .set_json(json!({ "message": "   " }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Message must not be empty");
        assert_eq!(agent.calls(), 0);

        let messages: Value =
            test::call_and_read_body_json(&app, get(&format!("/api/sessions/{id}/messages")).to_request()).await;
        assert_eq!(messages, json!([]));
    }

    #[actix_web::test]
    async fn leave_inquiry_renders_pending_table() {
        let agent = StubAgent::replying(leave_inquiry_body());
        let app = test_app!(agent);
        let id = open_session!(app, "hr");

        let req = post(&format!("/api/sessions/{id}/chat"))
            .set_json(json!({ "message": "Show all pending leave requests" }))
            .to_request();
        let reply: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(reply["message"]["role"], "assistant");
        assert_eq!(reply["message"]["content"], "You have 5 pending leave requests.");
        assert_eq!(reply["widget"]["widget"], "leave_table");
        assert_eq!(reply["widget"]["records"].as_array().unwrap().len(), 5);
        assert_eq!(reply["follow_up_suggestions"], json!(["Approve Emma Watson's leave"]));
        // payload is kept as received
        assert_eq!(reply["message"]["parsed_data"], leave_inquiry_body()["response"]);

        let sent = agent.requests.lock().unwrap()[0].clone();
        assert_eq!(sent.message, "Show all pending leave requests");
        assert_eq!(sent.agent_id, "6926c30fe758b644132e0744");
    }

    #[actix_web::test]
    async fn hiring_session_uses_hiring_agent() {
        let agent = StubAgent::replying(json!({
            "success": true,
            "response": {
                "result": "Open roles",
                "query_type": "job_search",
                "formatted_data": { "type": "card" }
            }
        }));
        let app = test_app!(agent);
        let id = open_session!(app, "hiring");

        let req = post(&format!("/api/sessions/{id}/chat"))
            .set_json(json!({ "message": "List all open job positions" }))
            .to_request();
        let reply: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(reply["widget"]["widget"], "job_cards");
        assert_eq!(agent.requests.lock().unwrap()[0].agent_id, Config::default().hiring_agent_id);
    }

    #[actix_web::test]
    async fn agent_failure_adds_single_fallback() {
        let agent = StubAgent::failing();
        let app = test_app!(agent);
        let id = open_session!(app, "hr");

        let req = post(&format!("/api/sessions/{id}/chat"))
            .set_json(json!({ "message": "hello" }))
            .to_request();
        let reply: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(reply["message"]["content"], "Error processing request. Please try again.");
        assert!(reply.get("widget").is_none());

        let messages: Value =
            test::call_and_read_body_json(&app, get(&format!("/api/sessions/{id}/messages")).to_request()).await;
        let messages = messages.as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["message"]["content"], "hello");
        assert_eq!(messages[0]["message"]["role"], "user");
    }

    #[actix_web::test]
    async fn null_agent_body_adds_single_fallback() {
        let agent = StubAgent::replying(Value::Null);
        let app = test_app!(agent);
        let id = open_session!(app, "hr");

        let req = post(&format!("/api/sessions/{id}/chat"))
            .set_json(json!({ "message": "hello" }))
            .to_request();
        let reply: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(reply["message"]["content"], "Error processing request. Please try again.");
        assert!(reply["message"].get("parsed_data").is_none_or(Value::is_null));
    }

    #[actix_web::test]
    async fn mistyped_suggestions_keep_reply_and_widget() {
        let body = json!({
            "success": true,
            "raw_response": "Here are the pending requests",
            "response": {
                "query_type": "leave_inquiry",
                "formatted_data": { "type": "table" },
                "follow_up_suggestions": "Approve all"
            }
        });
        let agent = StubAgent::replying(body.clone());
        let app = test_app!(agent);
        let id = open_session!(app, "hr");

        let req = post(&format!("/api/sessions/{id}/chat"))
            .set_json(json!({ "message": "Show all pending leave requests" }))
            .to_request();
        let reply: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(reply["message"]["content"], "Here are the pending requests");
        assert_eq!(reply["widget"]["widget"], "leave_table");
        assert_eq!(reply["follow_up_suggestions"], json!([]));
        assert_eq!(reply["message"]["parsed_data"], body["response"]);
    }

    #[actix_web::test]
    async fn dropped_chat_request_does_not_wedge_session() {
        let agent = StubAgent::stalling_first(json!({ "success": true, "raw_response": "Back again" }));
        let app = test_app!(agent);
        let id = open_session!(app, "hr");

        let req = post(&format!("/api/sessions/{id}/chat"))
            .set_json(json!({ "message": "hello" }))
            .to_request();
        let abandoned = actix_web::rt::time::timeout(Duration::from_millis(100), test::call_service(&app, req)).await;
        assert!(abandoned.is_err());
        assert_eq!(agent.calls(), 1);

        let view: Value = test::call_and_read_body_json(&app, get(&format!("/api/sessions/{id}")).to_request()).await;
        assert_eq!(view["loading"], false);
        let messages = view["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1]["message"]["content"], "Error processing request. Please try again.");

        let req = post(&format!("/api/sessions/{id}/chat"))
            .set_json(json!({ "message": "hello again" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let reply: Value = test::read_body_json(resp).await;
        assert_eq!(reply["message"]["content"], "Back again");
    }

    #[actix_web::test]
    async fn approve_then_confirm_updates_one_record() {
        let agent = StubAgent::failing();
        let app = test_app!(agent);
        let id = open_session!(app, "hr");

        let dialog: Value = test::call_and_read_body_json(
            &app,
            post(&format!("/api/sessions/{id}/leave/LEAVE003/approve")).to_request(),
        )
        .await;
        assert_eq!(dialog["state"], "open");
        assert_eq!(dialog["action"], "approve");
        assert_eq!(dialog["leave_details"]["employee_name"], "Sarah Johnson");

        let confirmed: Value = test::call_and_read_body_json(
            &app,
            post(&format!("/api/sessions/{id}/dialog/confirm")).to_request(),
        )
        .await;
        assert_eq!(
            confirmed["message"]["content"],
            "Leave request for Sarah Johnson has been approved successfully."
        );

        let leaves: Value =
            test::call_and_read_body_json(&app, get(&format!("/api/sessions/{id}/leave")).to_request()).await;
        let approved: Vec<_> = leaves
            .as_array()
            .unwrap()
            .iter()
            .filter(|l| l["status"] == "approved")
            .map(|l| l["id"].clone())
            .collect();
        assert_eq!(approved, vec![json!("LEAVE003")]);

        let resp = test::call_service(&app, post(&format!("/api/sessions/{id}/dialog/confirm")).to_request()).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let resp = test::call_service(
            &app,
            post(&format!("/api/sessions/{id}/leave/LEAVE003/reject")).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn cancel_leaves_records_alone() {
        let agent = StubAgent::failing();
        let app = test_app!(agent);
        let id = open_session!(app, "hr");

        test::call_service(&app, post(&format!("/api/sessions/{id}/leave/LEAVE001/reject")).to_request()).await;
        let dialog: Value = test::call_and_read_body_json(
            &app,
            post(&format!("/api/sessions/{id}/dialog/cancel")).to_request(),
        )
        .await;
        assert_eq!(dialog["state"], "closed");

        let view: Value = test::call_and_read_body_json(&app, get(&format!("/api/sessions/{id}")).to_request()).await;
        assert_eq!(view["messages"], json!([]));
    }

    #[actix_web::test]
    async fn leave_actions_need_hr_session() {
        let agent = StubAgent::failing();
        let app = test_app!(agent);
        let id = open_session!(app, "hiring");

        let resp = test::call_service(
            &app,
            post(&format!("/api/sessions/{id}/leave/LEAVE001/approve")).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn missing_session_and_record_are_404() {
        let agent = StubAgent::failing();
        let app = test_app!(agent);

        let resp = test::call_service(&app, get("/api/sessions/nope").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let id = open_session!(app, "hr");
        let resp = test::call_service(
            &app,
            post(&format!("/api/sessions/{id}/leave/LEAVE404/approve")).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn filters_narrow_leave_list() {
        let agent = StubAgent::failing();
        let app = test_app!(agent);
        let id = open_session!(app, "hr");

        let req = test::TestRequest::put()
            .uri(&format!("/api/sessions/{id}/filters"))
            .peer_addr(peer())
            .set_json(json!({ "department": "product", "statuses": ["pending"] }))
            .to_request();
        let leaves: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(leaves.as_array().unwrap().len(), 1);
        assert_eq!(leaves[0]["employee_name"], "Sarah Johnson");

        let recent: Value = test::call_and_read_body_json(
            &app,
            get(&format!("/api/sessions/{id}/recent-activity")).to_request(),
        )
        .await;
        assert_eq!(recent, leaves);
    }

    #[actix_web::test]
    async fn catalogue_endpoints() {
        let agent = StubAgent::failing();
        let app = test_app!(agent);

        let engineers: Value =
            test::call_and_read_body_json(&app, get("/api/employees?department=Engineering").to_request()).await;
        assert_eq!(engineers.as_array().unwrap().len(), 3);

        let departments: Value = test::call_and_read_body_json(&app, get("/api/departments").to_request()).await;
        assert_eq!(departments[0], "Human Resources");

        let summary: Value = test::call_and_read_body_json(&app, get("/api/attendance/summary").to_request()).await;
        assert_eq!(summary["present"], 18);

        let open_jobs: Value = test::call_and_read_body_json(&app, get("/api/jobs?status=open").to_request()).await;
        assert_eq!(open_jobs.as_array().unwrap().len(), 4);

        let interviews: Value =
            test::call_and_read_body_json(&app, get("/api/interviews?status=scheduled").to_request()).await;
        assert_eq!(interviews[0]["id"], "INT001");
    }
}
