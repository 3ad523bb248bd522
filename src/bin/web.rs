//! Single binary web server exposing the planner's actions as a REST API.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! The roster is kept in COURT_PLANNER_DATA (default court-planner.json).

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use court_planner::{CourtDirection, CourtPlanner, JsonFileStore, Page};
use serde::Deserialize;

type AppState = Data<CourtPlanner<JsonFileStore>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct PlayersQuery {
    #[serde(default)]
    query: String,
}

#[derive(Deserialize)]
struct AddPlayerBody {
    name: String,
}

/// Court count exactly as typed; a JSON number is accepted too.
#[derive(Deserialize)]
struct DrawBody {
    #[serde(default)]
    courts: serde_json::Value,
}

impl DrawBody {
    fn courts_input(&self) -> String {
        match &self.courts {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Number(n) => n.to_string(),
            _ => String::new(),
        }
    }
}

#[derive(Deserialize)]
struct SetPageBody {
    page: Page,
}

/// Path segment: player name (e.g. /api/players/{name})
#[derive(Deserialize)]
struct PlayerPath {
    name: String,
}

/// Path segment: court step direction (previous | next)
#[derive(Deserialize)]
struct CourtPath {
    direction: String,
}

impl CourtPath {
    fn direction(&self) -> Option<CourtDirection> {
        match self.direction.as_str() {
            "previous" | "left" => Some(CourtDirection::Previous),
            "next" | "right" => Some(CourtDirection::Next),
            _ => None,
        }
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "court-planner",
    })
}

#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Current view: counts, current court and the full roster in display order.
#[get("/api/view")]
async fn api_view(state: AppState) -> HttpResponse {
    HttpResponse::Ok().json(state.view())
}

/// View with the roster filtered by name (`?query=an`).
#[get("/api/players")]
async fn api_players(state: AppState, query: Query<PlayersQuery>) -> HttpResponse {
    HttpResponse::Ok().json(state.view_filtered(&query.query))
}

/// Add a player; duplicates and empty names are reported in `outcome`.
#[post("/api/players")]
async fn api_add_player(state: AppState, body: Json<AddPlayerBody>) -> HttpResponse {
    HttpResponse::Ok().json(state.add_player(&body.name))
}

#[delete("/api/players/{name}")]
async fn api_remove_player(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    HttpResponse::Ok().json(state.remove_player(&path.name))
}

/// Flip selection; 404 if the player does not exist.
#[post("/api/players/{name}/toggle")]
async fn api_toggle_player(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    let reply = state.toggle_select(&path.name);
    if reply.outcome.is_none() {
        return HttpResponse::NotFound().json(serde_json::json!({ "error": "No such player" }));
    }
    HttpResponse::Ok().json(reply)
}

/// Draw courts from the selected players and switch to the result page.
#[post("/api/draw")]
async fn api_draw(state: AppState, body: Option<Json<DrawBody>>) -> HttpResponse {
    let courts = body.map(|b| b.courts_input()).unwrap_or_default();
    HttpResponse::Ok().json(state.draw(&courts))
}

#[put("/api/page")]
async fn api_set_page(state: AppState, body: Json<SetPageBody>) -> HttpResponse {
    HttpResponse::Ok().json(state.navigate_page(body.page))
}

#[post("/api/court/{direction}")]
async fn api_step_court(state: AppState, path: Path<CourtPath>) -> HttpResponse {
    match path.direction() {
        Some(direction) => HttpResponse::Ok().json(state.navigate_court(direction)),
        None => HttpResponse::BadRequest()
            .json(serde_json::json!({ "error": "Direction must be previous or next" })),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_data_path() -> String {
    "court-planner.json".to_string()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let data_path = std::env::var("COURT_PLANNER_DATA").unwrap_or_else(|_| default_data_path());

    let store = JsonFileStore::open(&data_path).map_err(std::io::Error::other)?;
    log::info!("Using roster storage at {}", store.path().display());
    let state = Data::new(CourtPlanner::load(store));

    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let app_state = state.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .service(api_health)
            .service(favicon)
            .service(api_view)
            .service(api_players)
            .service(api_add_player)
            .service(api_remove_player)
            .service(api_toggle_player)
            .service(api_draw)
            .service(api_set_page)
            .service(api_step_court)
    })
    .bind(bind)?
    .run()
    .await?;

    // Save once more on shutdown; toggles are not written until the next mutation.
    match state.persist() {
        Ok(()) => log::info!("Roster saved on shutdown"),
        Err(e) => log::error!("Failed to save roster on shutdown: {}", e),
    }
    Ok(())
}
