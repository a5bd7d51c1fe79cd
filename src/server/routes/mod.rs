//! HTTP route modules

pub mod translate;

use actix_web::web;

/// Register the API routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/speech-to-speech-translate/",
        web::post().to(translate::speech_to_speech_translate),
    )
    .route(
        "/speech-to-speech-translate",
        web::post().to(translate::speech_to_speech_translate),
    );
}
