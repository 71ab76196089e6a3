//! gRPC implementation for AdService.

use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::info;

use adcore::{AdService, UserService};
use common::AppError;
use domain::DomainError;
use proto::ads::{
    ad_service_server::AdService as AdServiceProto, AdResponse, ChangeAdStatusRequest,
    CreateAdRequest, CreateUserRequest, DeleteAdRequest, DeleteAdResponse, DeleteUserRequest,
    DeleteUserResponse, GetUserRequest, ListAdResponse, ListAdsRequest, UpdateAdRequest,
    UserResponse,
};

/// gRPC service wrapper over the application core.
pub struct AdGrpcService {
    ads: Arc<dyn AdService>,
    users: Arc<dyn UserService>,
}

impl AdGrpcService {
    /// Create a new gRPC service wrapper.
    pub fn new(ads: Arc<dyn AdService>, users: Arc<dyn UserService>) -> Self {
        Self { ads, users }
    }
}

fn to_status(err: DomainError) -> Status {
    Status::from(AppError::from(err))
}

fn ad_to_proto(ad: &domain::Ad) -> AdResponse {
    AdResponse {
        id: ad.id,
        title: ad.title.clone(),
        text: ad.text.clone(),
        author_id: ad.author_id,
        published: ad.published,
    }
}

fn user_to_proto(user: &domain::User) -> UserResponse {
    UserResponse {
        id: user.id,
        name: user.nickname.clone(),
        email: user.email.clone(),
        activated: user.activated,
    }
}

#[tonic::async_trait]
impl AdServiceProto for AdGrpcService {
    async fn create_ad(
        &self,
        request: Request<CreateAdRequest>,
    ) -> Result<Response<AdResponse>, Status> {
        let req = request.into_inner();

        if self.users.check_user(req.user_id).await.is_err() {
            return Err(Status::not_found("user not found"));
        }

        let ad = self
            .ads
            .create_ad(req.title, req.text, req.user_id)
            .await
            .map_err(to_status)?;

        info!(ad_id = ad.id, author_id = ad.author_id, "created ad");
        Ok(Response::new(ad_to_proto(&ad)))
    }

    async fn change_ad_status(
        &self,
        request: Request<ChangeAdStatusRequest>,
    ) -> Result<Response<AdResponse>, Status> {
        let req = request.into_inner();

        let ad = self
            .ads
            .change_ad_status(req.ad_id, req.published, req.user_id)
            .await
            .map_err(to_status)?;

        info!(ad_id = ad.id, published = ad.published, "changed ad status");
        Ok(Response::new(ad_to_proto(&ad)))
    }

    async fn update_ad(
        &self,
        request: Request<UpdateAdRequest>,
    ) -> Result<Response<AdResponse>, Status> {
        let req = request.into_inner();

        let ad = self
            .ads
            .update_ad(req.user_id, req.title, req.text, req.ad_id)
            .await
            .map_err(to_status)?;

        info!(ad_id = ad.id, "updated ad");
        Ok(Response::new(ad_to_proto(&ad)))
    }

    async fn list_ads(
        &self,
        _request: Request<ListAdsRequest>,
    ) -> Result<Response<ListAdResponse>, Status> {
        let ads = self.ads.list_ads().await.map_err(to_status)?;
        let list: Vec<AdResponse> = ads.iter().map(ad_to_proto).collect();

        info!(count = list.len(), "listed published ads");
        Ok(Response::new(ListAdResponse { list }))
    }

    async fn delete_ad(
        &self,
        request: Request<DeleteAdRequest>,
    ) -> Result<Response<DeleteAdResponse>, Status> {
        let req = request.into_inner();

        let ad = self
            .ads
            .delete_ad(req.author_id, req.ad_id)
            .await
            .map_err(to_status)?;

        info!(ad_id = ad.id, author_id = ad.author_id, "deleted ad");
        Ok(Response::new(DeleteAdResponse { success: true }))
    }

    async fn create_user(
        &self,
        request: Request<CreateUserRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        let req = request.into_inner();

        let user = self
            .users
            .create_user(req.name, req.email)
            .await
            .map_err(to_status)?;

        info!(user_id = user.id, "created user");
        Ok(Response::new(user_to_proto(&user)))
    }

    async fn get_user(
        &self,
        request: Request<GetUserRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        let req = request.into_inner();

        let user = self.users.get_user(req.id).await.map_err(to_status)?;

        info!(user_id = user.id, "fetched user");
        Ok(Response::new(user_to_proto(&user)))
    }

    async fn delete_user(
        &self,
        request: Request<DeleteUserRequest>,
    ) -> Result<Response<DeleteUserResponse>, Status> {
        let req = request.into_inner();

        self.users.delete_user(req.id).await.map_err(to_status)?;

        info!(user_id = req.id, "deleted user");
        Ok(Response::new(DeleteUserResponse { success: true }))
    }
}
