use actix_session::Session;
use actix_web::HttpResponse;

use pf_shared::MessageBody;

/// Handler for `POST /signout`
///
/// Purges the cookie session and expires the cookie. Responds 200 even
/// when no session exists, so signing out is always safe to call.
pub async fn sign_out(session: Session) -> HttpResponse {
    session.purge();
    HttpResponse::Ok().json(MessageBody::new("Signed out..."))
}
