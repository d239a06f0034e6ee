use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use application::service::{
    CreateBookService, DeleteBookService, GetAllBookService, GetBookService, UpdateBookService,
};

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    BookTransformer, CreateBookRequest, DeleteBookRequest, GetBookRequest, UpdateBookRequest,
};
use crate::response::{BookListResponse, BookPresenter, CreatedBookPresenter, CreatedBookResponse};

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl BookRouter for Router<AppModule> {
    fn route_book(self) -> Self {
        // The collection handlers are named so they can be registered with and
        // without the trailing slash, which the original API treated as one
        // route.
        self.route("/books", get(list_books).post(create_book))
            .route("/books/", get(list_books).post(create_book))
            .route(
                "/books/:isbn",
                get(
                    |State(module): State<AppModule>, Path(isbn): Path<String>| async move {
                        Controller::new(BookTransformer, BookPresenter)
                            .intake(GetBookRequest::new(isbn))
                            .handle(|dto| async move { module.pgpool().get_book(dto).await })
                            .await
                            .map_err(ErrorStatus::from)
                    },
                )
                .put(
                    |State(module): State<AppModule>,
                     Path(isbn): Path<String>,
                     Json(body): Json<Value>| async move {
                        let transformed = Controller::new(BookTransformer, BookPresenter)
                            .try_intake(UpdateBookRequest::new(isbn, body))
                            .map_err(ErrorStatus::from)?;
                        transformed
                            .handle(|dto| async move { module.pgpool().update_book(dto).await })
                            .await
                            .map_err(ErrorStatus::from)
                    },
                )
                .delete(
                    |State(module): State<AppModule>, Path(isbn): Path<String>| async move {
                        Controller::new(BookTransformer, BookPresenter)
                            .intake(DeleteBookRequest::new(isbn))
                            .handle(|dto| async move { module.pgpool().delete_book(dto).await })
                            .await
                            .map_err(ErrorStatus::from)
                    },
                ),
            )
    }
}

async fn list_books(State(module): State<AppModule>) -> Result<BookListResponse, ErrorStatus> {
    Controller::new((), BookPresenter)
        .bypass(|| async move { module.pgpool().get_all_books().await })
        .await
        .map_err(ErrorStatus::from)
}

async fn create_book(
    State(module): State<AppModule>,
    Json(body): Json<Value>,
) -> Result<CreatedBookResponse, ErrorStatus> {
    let transformed = Controller::new(BookTransformer, CreatedBookPresenter)
        .try_intake(CreateBookRequest(body))
        .map_err(ErrorStatus::from)?;
    transformed
        .handle(|dto| async move { module.pgpool().create_book(dto).await })
        .await
        .map_err(ErrorStatus::from)
}
