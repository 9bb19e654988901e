#![allow(dead_code)] // OpenAPI doc stubs are only referenced by utoipa macros.

use crate::{
    handlers::{
        admin::CreateUserRequest,
        auth::{LogoutRequest, LogoutResponse, RefreshRequest},
        profile::ProfileResponse,
        shifts::ShiftActionResponse,
    },
    models::{
        checklist::{ChecklistRole, ChecklistSubmission, CreateChecklistRequest},
        directory::{DirectoryEntry, UpsertDirectoryEntry},
        evidence::ExerciseEvidence,
        incident::IncidentReport,
        settings::{SirenSetting, UpdateSirenSetting},
        shift_session::{
            ReportedLocation, SessionState, ShiftActionRequest, ShiftSession,
            ShiftStatusResponse,
        },
        user::{LoginRequest, LoginResponse, UserResponse, UserRole},
        ListQuery,
    },
};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        login_doc,
        refresh_doc,
        logout_doc,
        me_doc,
        shift_status_doc,
        shift_start_doc,
        shift_close_doc,
        shift_history_doc,
        checklist_submit_doc,
        checklist_list_doc,
        incident_create_doc,
        incident_list_doc,
        evidence_create_doc,
        evidence_list_doc,
        siren_get_doc,
        siren_update_doc,
        directory_list_doc,
        directory_get_doc,
        directory_upsert_doc,
        admin_create_user_doc
    ),
    components(
        schemas(
            // auth
            LoginRequest,
            LoginResponse,
            RefreshRequest,
            LogoutRequest,
            LogoutResponse,
            UserResponse,
            UserRole,
            ProfileResponse,
            // shifts
            ShiftSession,
            SessionState,
            ReportedLocation,
            ShiftActionRequest,
            ShiftActionResponse,
            ShiftStatusResponse,
            // checklists
            ChecklistRole,
            ChecklistSubmission,
            CreateChecklistRequest,
            // reports
            IncidentReport,
            ExerciseEvidence,
            // admin
            DirectoryEntry,
            UpsertDirectoryEntry,
            SirenSetting,
            UpdateSirenSetting,
            CreateUserRequest,
            ListQuery
        )
    ),
    modifiers(&SecuritySchemes),
    tags(
        (name = "Auth", description = "Login, token refresh and shift-aware logout"),
        (name = "Shifts", description = "Shift session lifecycle"),
        (name = "Checklists", description = "Duty checklist submissions"),
        (name = "Reports", description = "Incident reports and exercise evidence"),
        (name = "Admin", description = "Directory, settings and account management")
    ),
    security(("BearerAuth" = []))
)]
pub struct ApiDoc;

struct SecuritySchemes;

impl Modify for SecuritySchemes {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_default();

        let mut bearer = Http::new(HttpAuthScheme::Bearer);
        bearer.bearer_format = Some("JWT".to_string());

        components.add_security_scheme("BearerAuth", SecurityScheme::Http(bearer));
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login succeeded", body = LoginResponse),
        (status = 400, description = "Malformed identifier"),
        (status = 401, description = "Invalid credentials"),
        (status = 429, description = "Too many attempts")
    ),
    tag = "Auth",
    security(())
)]
fn login_doc() {}

#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    request_body = RefreshRequest,
    responses((status = 200, description = "Tokens rotated", body = LoginResponse)),
    tag = "Auth",
    security(())
)]
fn refresh_doc() {}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    request_body = LogoutRequest,
    responses(
        (status = 200, description = "Logged out", body = LogoutResponse),
        (status = 404, description = "Asked to end a shift but none was open")
    ),
    tag = "Auth"
)]
fn logout_doc() {}

#[utoipa::path(
    get,
    path = "/api/me",
    responses((status = 200, description = "Current user profile", body = ProfileResponse)),
    tag = "Auth"
)]
fn me_doc() {}

#[utoipa::path(
    get,
    path = "/api/shifts/status",
    responses((status = 200, description = "Open shift, if any", body = ShiftStatusResponse)),
    tag = "Shifts"
)]
fn shift_status_doc() {}

#[utoipa::path(
    post,
    path = "/api/shifts/start",
    request_body = ShiftActionRequest,
    responses(
        (status = 201, description = "Shift opened", body = ShiftActionResponse),
        (status = 409, description = "A shift is already open")
    ),
    tag = "Shifts"
)]
fn shift_start_doc() {}

#[utoipa::path(
    post,
    path = "/api/shifts/close",
    request_body = ShiftActionRequest,
    responses(
        (status = 200, description = "Shift closed", body = ShiftActionResponse),
        (status = 404, description = "No open shift to close")
    ),
    tag = "Shifts"
)]
fn shift_close_doc() {}

#[utoipa::path(
    get,
    path = "/api/shifts",
    params(ListQuery),
    responses((status = 200, description = "Recent shifts, newest first", body = [ShiftSession])),
    tag = "Shifts"
)]
fn shift_history_doc() {}

#[utoipa::path(
    post,
    path = "/api/checklists",
    request_body = CreateChecklistRequest,
    responses(
        (status = 201, description = "Checklist stored", body = ChecklistSubmission),
        (status = 400, description = "Validation failed")
    ),
    tag = "Checklists"
)]
fn checklist_submit_doc() {}

#[utoipa::path(
    get,
    path = "/api/checklists",
    params(ListQuery),
    responses((status = 200, description = "Own submissions", body = [ChecklistSubmission])),
    tag = "Checklists"
)]
fn checklist_list_doc() {}

#[utoipa::path(
    post,
    path = "/api/incidents",
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Incident stored", body = IncidentReport),
        (status = 400, description = "Missing description or photo")
    ),
    tag = "Reports"
)]
fn incident_create_doc() {}

#[utoipa::path(
    get,
    path = "/api/incidents",
    params(ListQuery),
    responses((status = 200, description = "Own incident reports", body = [IncidentReport])),
    tag = "Reports"
)]
fn incident_list_doc() {}

#[utoipa::path(
    post,
    path = "/api/evidence",
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Evidence stored", body = ExerciseEvidence),
        (status = 400, description = "Missing routine or photo")
    ),
    tag = "Reports"
)]
fn evidence_create_doc() {}

#[utoipa::path(
    get,
    path = "/api/evidence",
    params(ListQuery),
    responses((status = 200, description = "Own exercise evidence", body = [ExerciseEvidence])),
    tag = "Reports"
)]
fn evidence_list_doc() {}

#[utoipa::path(
    get,
    path = "/api/settings/siren",
    responses((status = 200, description = "Current siren color", body = SirenSetting)),
    tag = "Admin"
)]
fn siren_get_doc() {}

#[utoipa::path(
    put,
    path = "/api/admin/settings/siren",
    request_body = UpdateSirenSetting,
    responses(
        (status = 200, description = "Siren color updated", body = SirenSetting),
        (status = 400, description = "Not a hex color")
    ),
    tag = "Admin"
)]
fn siren_update_doc() {}

#[utoipa::path(
    get,
    path = "/api/admin/directory",
    responses((status = 200, description = "All directory entries", body = [DirectoryEntry])),
    tag = "Admin"
)]
fn directory_list_doc() {}

#[utoipa::path(
    get,
    path = "/api/admin/directory/{employee_code}",
    params(("employee_code" = String, Path, description = "Employee code")),
    responses(
        (status = 200, description = "Directory entry", body = DirectoryEntry),
        (status = 404, description = "No entry for this code")
    ),
    tag = "Admin"
)]
fn directory_get_doc() {}

#[utoipa::path(
    put,
    path = "/api/admin/directory/{employee_code}",
    params(("employee_code" = String, Path, description = "Employee code")),
    request_body = UpsertDirectoryEntry,
    responses((status = 200, description = "Entry created or replaced", body = DirectoryEntry)),
    tag = "Admin"
)]
fn directory_upsert_doc() {}

#[utoipa::path(
    post,
    path = "/api/admin/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 409, description = "Username already exists")
    ),
    tag = "Admin"
)]
fn admin_create_user_doc() {}
