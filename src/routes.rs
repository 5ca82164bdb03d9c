use crate::{
    api::{company, contract, employee, train_eval, vacation},
    auth::{handlers, middleware::require_session},
};
use actix_web::{middleware::from_fn, web};

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Public routes
    cfg.service(
        web::resource("/")
            .route(web::get().to(handlers::login_page))
            .route(web::post().to(handlers::login)),
    )
    .service(web::resource("/logout").route(web::get().to(handlers::logout)));

    // Everything else needs a session. Registered last: the empty scope
    // claims every remaining path.
    cfg.service(
        web::scope("")
            .wrap(from_fn(require_session))
            .service(web::resource("/menu").route(web::get().to(employee::menu)))
            .service(web::resource("/employee").route(web::get().to(employee::employee_detail)))
            .service(
                web::resource("/get_employee_name/{employee_id}")
                    .route(web::get().to(employee::employee_name)),
            )
            .service(web::resource("/companies").route(web::get().to(company::list_companies)))
            .service(
                web::resource("/add-contract")
                    .route(web::get().to(contract::add_contract_page))
                    .route(web::post().to(contract::add_contract)),
            )
            .service(web::resource("/train-eval").route(web::get().to(train_eval::dashboard)))
            .service(
                web::resource("/add-evaluation")
                    .route(web::get().to(train_eval::add_evaluation_page))
                    .route(web::post().to(train_eval::add_evaluation)),
            )
            .service(
                web::resource("/add-training")
                    .route(web::get().to(train_eval::add_training_page))
                    .route(web::post().to(train_eval::add_training)),
            )
            .service(
                web::resource("/register_vacation")
                    .route(web::get().to(vacation::register_vacation)),
            )
            .service(web::resource("/add_vacation").route(web::post().to(vacation::add_vacation))),
    );
}
