//! Blog CRUD handlers.
//!
//! POST and PATCH accept either a JSON body or a multipart form; the
//! multipart variant may carry a binary `image` part, which takes
//! precedence over a `blog_image_url` text field in the same request.

use actix_multipart::Multipart;
use actix_web::{Either, HttpResponse, web};
use futures::TryStreamExt;
use uuid::Uuid;

use inkwell_core::domain::{BlogPatch, BlogPost};
use inkwell_core::media::{ImageInput, UploadedImage};
use inkwell_shared::dto::{BlogResponse, CreateBlogRequest, MessageResponse, UpdateBlogRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Unified view of a create/update request body, whichever transport
/// carried it.
#[derive(Default)]
struct BlogInput {
    title: Option<String>,
    content: Option<String>,
    image: ImageInput,
}

impl From<CreateBlogRequest> for BlogInput {
    fn from(req: CreateBlogRequest) -> Self {
        Self {
            title: req.blog_title,
            content: req.blog_content,
            image: ImageInput {
                url: req.blog_image_url,
                file: None,
            },
        }
    }
}

impl From<UpdateBlogRequest> for BlogInput {
    fn from(req: UpdateBlogRequest) -> Self {
        Self {
            title: req.blog_title,
            content: req.blog_content,
            image: ImageInput {
                url: req.blog_image_url,
                file: None,
            },
        }
    }
}

/// POST /api/blogs
pub async fn create(
    state: web::Data<AppState>,
    body: Either<web::Json<CreateBlogRequest>, Multipart>,
) -> AppResult<HttpResponse> {
    let input = match body {
        Either::Left(json) => BlogInput::from(json.into_inner()),
        Either::Right(multipart) => read_multipart(multipart).await?,
    };

    // Required fields are checked before any image is resolved so a bad
    // request never leaves an orphaned upload behind.
    let title = input.title.filter(|t| !t.is_empty());
    let content = input.content.filter(|c| !c.is_empty());
    let (Some(title), Some(content)) = (title, content) else {
        return Err(AppError::BadRequest(
            "Title and content are required.".to_string(),
        ));
    };

    let image = state.media.resolve(input.image).await?;
    let post = BlogPost::new(title, content, image)?;
    let saved = state.blogs.insert(post).await?;

    Ok(HttpResponse::Created().json(to_response(saved)))
}

/// GET /api/blogs
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.blogs.find_all().await?;
    let body: Vec<BlogResponse> = posts.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/blogs/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    let post = state
        .blogs
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog not found".to_string()))?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// PATCH /api/blogs/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: Either<web::Json<UpdateBlogRequest>, Multipart>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let input = match body {
        Either::Left(json) => BlogInput::from(json.into_inner()),
        Either::Right(multipart) => read_multipart(multipart).await?,
    };

    let mut post = state
        .blogs
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog not found.".to_string()))?;

    let image = state.media.resolve(input.image).await?;
    post.apply_patch(BlogPatch {
        title: input.title,
        content: input.content,
        image,
    });

    let updated = state.blogs.update(post).await?;

    Ok(HttpResponse::Ok().json(to_response(updated)))
}

/// DELETE /api/blogs/{id}
pub async fn remove(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    state.blogs.delete(id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Blog deleted successfully")))
}

/// A malformed id cannot name any record, so it reads as not-found
/// rather than as a syntax error.
fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound("Blog not found".to_string()))
}

fn to_response(post: BlogPost) -> BlogResponse {
    BlogResponse {
        id: post.id,
        blog_title: post.title,
        blog_content: post.content,
        date: post.created_at,
        image: post.image.map(|i| i.into_inner()),
    }
}

/// Drain a multipart form into a [`BlogInput`]. Text fields are decoded
/// as UTF-8; the `image` part is kept as raw bytes. Unknown fields are
/// ignored.
async fn read_multipart(mut payload: Multipart) -> Result<BlogInput, AppError> {
    let mut input = BlogInput::default();

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart payload: {e}")))?
    {
        let name = field.name().to_owned();
        let filename = field
            .content_disposition()
            .get_filename()
            .map(str::to_owned);
        let content_type = field.content_type().map(|m| m.to_string());

        let mut data = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| AppError::BadRequest(format!("Invalid multipart payload: {e}")))?
        {
            data.extend_from_slice(&chunk);
        }

        match name.as_str() {
            "image" if filename.is_some() => {
                // Browsers send an empty part when no file was chosen
                if !data.is_empty() {
                    input.image.file = Some(UploadedImage {
                        filename: filename.unwrap_or_default(),
                        content_type: content_type.unwrap_or_default(),
                        data,
                    });
                }
            }
            "blog_title" => input.title = Some(text_field(data)?),
            "blog_content" => input.content = Some(text_field(data)?),
            "blog_image_url" => input.image.url = Some(text_field(data)?),
            _ => {}
        }
    }

    Ok(input)
}

fn text_field(data: Vec<u8>) -> Result<String, AppError> {
    String::from_utf8(data)
        .map_err(|_| AppError::BadRequest("Form fields must be valid UTF-8".to_string()))
}
