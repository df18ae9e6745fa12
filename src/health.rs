use actix_web::{get, web, HttpResponse, Responder};
use deadpool_redis::{redis, Pool};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
    redis: &'static str,
}

fn status_of(ok: bool) -> &'static str {
    if ok {
        "ok"
    } else {
        "unhealthy"
    }
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

async fn database_ok(db: &DatabaseConnection) -> bool {
    let stmt = Statement::from_string(db.get_database_backend(), "SELECT 1");
    match db.execute(stmt).await {
        Ok(_) => true,
        Err(e) => {
            warn!(error = %e, "Readiness: database check failed");
            false
        }
    }
}

async fn redis_ok(pool: &Pool) -> bool {
    let mut conn = match pool.get().await {
        Ok(conn) => conn,
        Err(e) => {
            warn!(error = %e, "Readiness: redis pool exhausted or unreachable");
            return false;
        }
    };

    match redis::cmd("PING").query_async::<String>(&mut conn).await {
        Ok(_) => true,
        Err(e) => {
            warn!(error = %e, "Readiness: redis PING failed");
            false
        }
    }
}

/// READINESS PROBE
/// - Postgres `SELECT 1`
/// - Redis `PING`
#[get("/ready")]
pub async fn readiness(
    db: web::Data<Arc<DatabaseConnection>>,
    redis_pool: web::Data<Arc<Pool>>,
) -> impl Responder {
    let db_ok = database_ok(db.get_ref()).await;
    let redis_ok = redis_ok(redis_pool.get_ref()).await;

    let body = ReadinessResponse {
        status: status_of(db_ok && redis_ok),
        database: status_of(db_ok),
        redis: status_of(redis_ok),
    };

    if db_ok && redis_ok {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
