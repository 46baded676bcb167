//! End-to-end lister/catalog/coordinator tests against a local fixture
//! server that mimics a static file server's directory indexes.

use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::Router;

use shelf_core::command::StepOutcome;
use shelf_core::config::Config;
use shelf_core::state::PlaybackStatus;
use shelf_player::catalog::CatalogLoader;
use shelf_player::listing::DirectoryLister;
use shelf_player::transport::SilentTransport;
use shelf_player::{Player, PlayerError};

const ROOT_LISTING: &str = r#"
    <html><body><h1>Index of /songs/</h1>
        <a href="/songs/">../</a>
        <a href="/songs/ncs/">ncs/</a>
        <a href="/songs/cs/">cs/</a>
        <a href="/songs/broken/">broken/</a>
        <a href="/songs/lofi/">lofi/</a>
        <a href="/songs/index.html">index.html</a>
    </body></html>
"#;

const NCS_LISTING: &str = r#"
    <html><body><h1>Index of /songs/ncs/</h1>
        <a href="/songs/">../</a>
        <a href="/songs/ncs/One%20Step.mp3">One Step.mp3</a>
        <a href="/songs/ncs/cover.jpg">cover.jpg</a>
        <a href="/songs/ncs/Second.mp3">Second.mp3</a>
        <a href="/songs/ncs/info.json">info.json</a>
        <a href="/songs/ncs/Third.mp3">Third.mp3</a>
    </body></html>
"#;

const EMPTY_LISTING: &str = r#"
    <html><body><h1>Index of /songs/empty/</h1>
        <a href="/songs/">../</a>
        <a href="/songs/empty/notes.txt">notes.txt</a>
    </body></html>
"#;

async fn serve_fixture(uri: Uri) -> Response {
    match uri.path() {
        "/songs/" => Html(ROOT_LISTING).into_response(),
        "/songs/ncs/" => Html(NCS_LISTING).into_response(),
        "/songs/empty/" => Html(EMPTY_LISTING).into_response(),
        "/songs/ncs/info.json" => {
            r#"{ "title": "NCS Hits", "description": "Copyright-free tracks" }"#.into_response()
        }
        "/songs/cs/info.json" => {
            r#"{ "title": "CS Mix", "description": "Background loops" }"#.into_response()
        }
        "/songs/lofi/info.json" => {
            r#"{ "title": "Lofi", "description": "Late night" }"#.into_response()
        }
        // This album's metadata is unreachable; the catalog must skip it.
        "/songs/broken/info.json" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

async fn spawn_fixture_server() -> String {
    init_tracing();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fixture listener");
    let addr = listener.local_addr().expect("fixture local addr");
    let app = Router::new().fallback(serve_fixture);
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fixture server");
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn lister_returns_audio_entries_in_document_order() {
    let base = spawn_fixture_server().await;
    let lister = DirectoryLister::new(reqwest::Client::new(), base, ".mp3");

    let tracks = lister.fetch_tracks("songs/ncs").await.unwrap();
    let names: Vec<&str> = tracks.iter().map(|t| t.file_name.as_str()).collect();
    assert_eq!(names, vec!["One%20Step.mp3", "Second.mp3", "Third.mp3"]);
    assert_eq!(tracks[0].display_title(), "One Step");
}

#[tokio::test]
async fn lister_empty_folder_is_ok_not_error() {
    let base = spawn_fixture_server().await;
    let lister = DirectoryLister::new(reqwest::Client::new(), base, ".mp3");

    let tracks = lister.fetch_tracks("songs/empty").await.unwrap();
    assert!(tracks.is_empty());
}

#[tokio::test]
async fn lister_http_failure_is_fetch_error() {
    let base = spawn_fixture_server().await;
    let lister = DirectoryLister::new(reqwest::Client::new(), base, ".mp3");

    match lister.fetch_tracks("songs/missing").await {
        Err(PlayerError::Fetch { url, reason }) => {
            assert!(url.ends_with("/songs/missing/"));
            assert!(reason.contains("404"));
        }
        other => panic!("expected Fetch error, got {:?}", other.map(|t| t.len())),
    }
}

#[tokio::test]
async fn catalog_skips_broken_album_and_preserves_order() {
    let base = spawn_fixture_server().await;
    let loader = CatalogLoader::new(reqwest::Client::new(), base, "songs");

    let albums = loader.load().await.unwrap();
    let folders: Vec<&str> = albums.iter().map(|a| a.folder.as_str()).collect();
    assert_eq!(folders, vec!["ncs", "cs", "lofi"]);
    assert_eq!(albums[0].title, "NCS Hits");
    assert_eq!(albums[0].cover_path, "songs/ncs/cover.jpg");
}

#[tokio::test]
async fn player_load_select_and_step_over_http() {
    let base = spawn_fixture_server().await;
    let mut config = Config::default();
    config.server.base_url = base;

    let mut player = Player::new(
        reqwest::Client::new(),
        &config,
        SilentTransport::new(),
    );

    let playlist = player.load_folder("songs/ncs").await.unwrap();
    assert_eq!(playlist.len(), 3);

    player.select_track(0, false).unwrap();
    assert_eq!(player.state().status, PlaybackStatus::Paused);
    assert!(player
        .transport()
        .source()
        .unwrap()
        .ends_with("/songs/ncs/One%20Step.mp3"));

    assert_eq!(player.next().unwrap(), StepOutcome::Moved(1));
    assert_eq!(player.next().unwrap(), StepOutcome::Moved(2));
    assert_eq!(player.next().unwrap(), StepOutcome::AtBoundary);
    assert_eq!(player.state().track_index, Some(2));
}

#[tokio::test]
async fn player_failed_load_discards_previous_playlist() {
    let base = spawn_fixture_server().await;
    let mut config = Config::default();
    config.server.base_url = base;

    let mut player = Player::new(
        reqwest::Client::new(),
        &config,
        SilentTransport::new(),
    );

    player.load_folder("songs/ncs").await.unwrap();
    player.select_track(1, false).unwrap();

    let err = player.load_folder("songs/missing").await.unwrap_err();
    assert!(matches!(err, PlayerError::Fetch { .. }));
    // No stale or partial playlist survives the failure.
    assert!(player.playlist().is_empty());
    assert_eq!(player.state().track_index, None);
    assert_eq!(player.state().status, PlaybackStatus::Idle);
}
