use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::assignments::model::{Assignment, CreateAssignmentDto};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginRequest, LoginResponse};
use crate::modules::courses::model::{
    Course, CourseWithCreator, CreateCourseDto, Inscription, Role,
};
use crate::modules::publications::model::{CreatePublicationDto, Evaluation, Publication};
use crate::modules::users::model::{CreateUserDto, InscriptionInfo, User, UserWithRelations};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login_user,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::get_user_by_email,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::list_courses,
        crate::modules::courses::controller::get_course,
        crate::modules::courses::controller::enroll_by_id,
        crate::modules::courses::controller::enroll_by_email,
        crate::modules::courses::controller::delegate,
        crate::modules::assignments::controller::create_assignment,
        crate::modules::assignments::controller::list_assignments,
        crate::modules::assignments::controller::get_assignment,
        crate::modules::publications::controller::create_publication,
        crate::modules::publications::controller::list_publications,
        crate::modules::publications::controller::get_publication,
    ),
    components(
        schemas(
            User,
            CreateUserDto,
            UserWithRelations,
            InscriptionInfo,
            Course,
            CourseWithCreator,
            CreateCourseDto,
            Inscription,
            Role,
            LoginRequest,
            LoginResponse,
            Assignment,
            CreateAssignmentDto,
            Publication,
            CreatePublicationDto,
            Evaluation,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and token issuance"),
        (name = "Users", description = "User creation and lookup"),
        (name = "Courses", description = "Course creation and retrieval"),
        (name = "Enrollment", description = "Course membership and delegation"),
        (name = "Assignments", description = "Course assignments"),
        (name = "Publications", description = "Course publications and evaluations")
    ),
    info(
        title = "Learnhub API",
        version = "0.1.0",
        description = "Course enrollment and authorization API built with Rust, Axum, and PostgreSQL.",
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
            );
        }
    }
}
