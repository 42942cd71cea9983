use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::content::Command;
use crate::errors::AppError;
use crate::models::defaults::HEADING_COLOR_PALETTE;
use crate::models::ResumeDocument;
use crate::render::fonts::{FontFamily, ALL_FAMILIES};
use crate::render::style::is_valid_scale;
use crate::render::{export_file_name, render, StyleConfig, VisualDocument};
use crate::state::AppState;
use crate::storage;

#[derive(Serialize)]
pub struct CommandResponse {
    pub changed: bool,
    pub document: ResumeDocument,
}

#[derive(Serialize)]
pub struct PreviewResponse {
    pub file_name: String,
    pub document: VisualDocument,
}

#[derive(Serialize)]
pub struct ColorOption {
    pub hex: &'static str,
    pub name: &'static str,
}

#[derive(Serialize)]
pub struct FontOption {
    pub id: FontFamily,
    pub name: &'static str,
}

#[derive(Serialize)]
pub struct ThemeOptions {
    pub heading_colors: Vec<ColorOption>,
    pub fonts: Vec<FontOption>,
}

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeDocument> {
    Json(state.session.current().as_ref().clone())
}

/// PUT /api/v1/resume
pub async fn handle_replace_resume(
    State(state): State<AppState>,
    Json(doc): Json<ResumeDocument>,
) -> Json<ResumeDocument> {
    let doc = state.session.replace(doc);
    info!("Resume {} replaced ({} sections)", doc.id, doc.sections.len());
    Json(doc.as_ref().clone())
}

/// POST /api/v1/resume/commands
pub async fn handle_apply_command(
    State(state): State<AppState>,
    Json(command): Json<Command>,
) -> Json<CommandResponse> {
    let (doc, changed) = state.session.apply(&command);
    info!(op = command.name(), changed, "Applied command");
    Json(CommandResponse {
        changed,
        document: doc.as_ref().clone(),
    })
}

/// GET /api/v1/resume/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Query(config): Query<StyleConfig>,
) -> Result<Json<PreviewResponse>, AppError> {
    if let Some(scale) = config.scale {
        if !is_valid_scale(scale) {
            return Err(AppError::Validation(format!(
                "scale must be a positive number, got {scale}"
            )));
        }
    }
    let doc = state.session.current();
    Ok(Json(PreviewResponse {
        file_name: export_file_name(&doc),
        document: render(&doc, &config),
    }))
}

/// POST /api/v1/resume/reset
pub async fn handle_reset(
    State(state): State<AppState>,
) -> Result<Json<ResumeDocument>, AppError> {
    storage::clear(state.store.as_ref()).await?;
    let doc = state.session.reset();
    Ok(Json(doc.as_ref().clone()))
}

/// GET /api/v1/resume/theme
pub async fn handle_theme_options() -> Json<ThemeOptions> {
    Json(ThemeOptions {
        heading_colors: HEADING_COLOR_PALETTE
            .iter()
            .map(|&(hex, name)| ColorOption { hex, name })
            .collect(),
        fonts: ALL_FAMILIES
            .into_iter()
            .map(|id| FontOption {
                id,
                name: id.display_name(),
            })
            .collect(),
    })
}
