use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::features::model::FeaturesResponse;
use crate::modules::pages::model::PageResponse;
use crate::modules::session::controller::ErrorResponse;
use crate::modules::session::model::{
    SessionResponse, SessionUserResponse, ViewAsRequest, ViewAsResponse,
};
use crate::modules::sidebar::model::{SidebarResponse, ToggleGroupResponse};
use crate::sidebar::SidebarCategory;
use campusgate_core::Role;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::session::controller::get_session,
        crate::modules::session::controller::set_view_as,
        crate::modules::session::controller::logout,
        crate::modules::sidebar::controller::get_sidebar,
        crate::modules::sidebar::controller::toggle_sidebar_group,
        crate::modules::features::controller::get_features,
    ),
    components(
        schemas(
            Role,
            SessionResponse,
            SessionUserResponse,
            ViewAsRequest,
            ViewAsResponse,
            SidebarCategory,
            SidebarResponse,
            ToggleGroupResponse,
            FeaturesResponse,
            PageResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Session", description = "Session state and admin view-as switching"),
        (name = "Sidebar", description = "Persisted sidebar group state"),
        (name = "Features", description = "Runtime feature flags")
    ),
    info(
        title = "Campusgate API",
        version = "0.1.0",
        description = "Route access control for the campus learning platform: protected, role, guest, feature and language gates.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
