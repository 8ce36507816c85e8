use utoipa::{
    IntoParams, Modify, OpenApi,
    openapi::{
        self, ContentBuilder, OpenApi as OpenApiSpec, Ref, Required, ResponseBuilder,
        path::{HttpMethod, OperationBuilder, ParameterBuilder, ParameterIn},
        request_body::RequestBodyBuilder,
        schema::{ObjectBuilder, Type},
        security::{HttpAuthScheme, HttpBuilder, SecurityRequirement, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        accounts::{
            ChangePasswordRequest, LoginRequest, LoginResponse, RegisterRequest,
            UpdateProfileRequest,
        },
        comments::{CommentList, CreateCommentRequest, UpdateCommentRequest},
        favorites::{AddFavoriteRequest, FavoriteProductList},
        locations::{
            CityList, CreateCityRequest, CreateDepartmentRequest, DepartmentDetail,
            DepartmentList, UpdateCityRequest, UpdateDepartmentRequest,
        },
        lookups::{LookupList, LookupRequest},
        products::{CreateProductRequest, ProductList, ProductQuery, UpdateProductRequest},
        reels::{CreateReelRequest, ReelList, UpdateReelRequest},
        stores::{CreateStoreRequest, StoreList, UpdateStoreRequest},
        videos::{GenerateVideoRequest, VideoList},
    },
    models::{
        City, Comment, Department, Favorite, GeneratedVideo, LikeStatus, LookupItem, Product,
        ProductDetail, Reel, Store, User,
    },
    pagination::PaginationQuery,
    response::{ApiResponse, Meta, RecordCount, Removed},
    routes::{
        accounts, cities, comments, departments, favorites, health, likes, products, reels,
        stores, videos,
    },
};

/// Lookup tables served by `routes::lookups`, as (path segment, tag).
const LOOKUP_RESOURCES: [(&str, &str); 6] = [
    ("countries", "Countries"),
    ("categories", "Categories"),
    ("marketplaces", "Marketplaces"),
    ("statuses", "Statuses"),
    ("reputations", "Reputations"),
    ("profiles", "Profiles"),
];

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
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

/// The lookup routers are generic, so their operations are added here rather than
/// through `#[utoipa::path]`.
struct LookupDocs;

impl Modify for LookupDocs {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        for (resource, tag) in LOOKUP_RESOURCES {
            let base = format!("/api/{resource}");
            let paths = &mut openapi.paths;

            paths.add_path_operation(
                &base,
                vec![HttpMethod::Get],
                read_operation(tag, &format!("list_{resource}"), "LookupList"),
            );
            paths.add_path_operation(
                &base,
                vec![HttpMethod::Post],
                write_operation(tag, &format!("create_{resource}"), "LookupItem")
                    .request_body(Some(lookup_body())),
            );
            paths.add_path_operation(
                format!("{base}/combo"),
                vec![HttpMethod::Get],
                read_operation(tag, &format!("combo_{resource}"), "LookupList"),
            );
            paths.add_path_operation(
                format!("{base}/paginated"),
                vec![HttpMethod::Get],
                read_operation(tag, &format!("paginate_{resource}"), "LookupList")
                    .parameters(Some(PaginationQuery::into_params(|| Some(ParameterIn::Query)))),
            );
            paths.add_path_operation(
                format!("{base}/totalRecordsPaginated"),
                vec![HttpMethod::Get],
                read_operation(tag, &format!("count_{resource}"), "RecordCount")
                    .parameters(Some(PaginationQuery::into_params(|| Some(ParameterIn::Query)))),
            );

            let item = format!("{base}/{{id}}");
            paths.add_path_operation(
                &item,
                vec![HttpMethod::Get],
                read_operation(tag, &format!("get_{resource}"), "LookupItem").parameter(id_param()),
            );
            paths.add_path_operation(
                &item,
                vec![HttpMethod::Put],
                write_operation(tag, &format!("update_{resource}"), "LookupItem")
                    .parameter(id_param())
                    .request_body(Some(lookup_body())),
            );
            paths.add_path_operation(
                &item,
                vec![HttpMethod::Delete],
                write_operation(tag, &format!("delete_{resource}"), "Removed").parameter(id_param()),
            );
        }
    }
}

fn read_operation(tag: &str, operation_id: &str, schema: &str) -> OperationBuilder {
    OperationBuilder::new()
        .tag(tag)
        .operation_id(Some(operation_id))
        .response(
            "200",
            ResponseBuilder::new()
                .description("Wrapped in ApiResponse")
                .content(
                    "application/json",
                    ContentBuilder::new()
                        .schema(Some(Ref::from_schema_name(schema)))
                        .build(),
                )
                .build(),
        )
}

fn write_operation(tag: &str, operation_id: &str, schema: &str) -> OperationBuilder {
    read_operation(tag, operation_id, schema)
        .response("403", ResponseBuilder::new().description("Admin only").build())
        .security(SecurityRequirement::new("bearer_auth", Vec::<String>::new()))
}

fn id_param() -> openapi::path::Parameter {
    ParameterBuilder::new()
        .name("id")
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .schema(Some(ObjectBuilder::new().schema_type(Type::Integer).build()))
        .build()
}

fn lookup_body() -> openapi::request_body::RequestBody {
    RequestBodyBuilder::new()
        .content(
            "application/json",
            ContentBuilder::new()
                .schema(Some(Ref::from_schema_name("LookupRequest")))
                .build(),
        )
        .required(Some(Required::True))
        .build()
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        accounts::register,
        accounts::login,
        accounts::me,
        accounts::update_me,
        accounts::change_password,
        departments::list_departments,
        departments::combo_departments,
        departments::departments_of_country,
        departments::paginate_departments,
        departments::count_departments,
        departments::get_department,
        departments::create_department,
        departments::update_department,
        departments::delete_department,
        cities::list_cities,
        cities::combo_cities,
        cities::cities_of_department,
        cities::paginate_cities,
        cities::count_cities,
        cities::get_city,
        cities::create_city,
        cities::update_city,
        cities::delete_city,
        stores::list_stores,
        stores::combo_stores,
        stores::my_stores,
        stores::paginate_stores,
        stores::count_stores,
        stores::get_store,
        stores::create_store,
        stores::update_store,
        stores::delete_store,
        products::list_products,
        products::paginate_products,
        products::count_products,
        products::liked_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
        reels::list_reels,
        reels::reels_of_product,
        reels::paginate_reels,
        reels::count_reels,
        reels::get_reel,
        reels::create_reel,
        reels::update_reel,
        reels::delete_reel,
        favorites::add_favorite,
        favorites::remove_favorite,
        favorites::list_favorites,
        likes::liked_products,
        likes::like_status,
        likes::like_product,
        likes::unlike_product,
        comments::list_comments,
        comments::paginate_comments,
        comments::count_comments,
        comments::count_for_product,
        comments::get_comment,
        comments::create_comment,
        comments::update_comment,
        comments::delete_comment,
        videos::generate_video,
        videos::video_status,
        videos::list_videos,
        videos::get_video
    ),
    components(
        schemas(
            User,
            LookupItem,
            Department,
            City,
            Store,
            Product,
            ProductDetail,
            Reel,
            Favorite,
            Comment,
            LikeStatus,
            GeneratedVideo,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            UpdateProfileRequest,
            ChangePasswordRequest,
            LookupRequest,
            LookupList,
            CreateDepartmentRequest,
            UpdateDepartmentRequest,
            DepartmentList,
            DepartmentDetail,
            CreateCityRequest,
            UpdateCityRequest,
            CityList,
            CreateStoreRequest,
            UpdateStoreRequest,
            StoreList,
            CreateProductRequest,
            UpdateProductRequest,
            ProductList,
            ProductQuery,
            CreateReelRequest,
            UpdateReelRequest,
            ReelList,
            AddFavoriteRequest,
            FavoriteProductList,
            CreateCommentRequest,
            UpdateCommentRequest,
            CommentList,
            GenerateVideoRequest,
            VideoList,
            PaginationQuery,
            RecordCount,
            Removed,
            Meta,
            ApiResponse<LookupList>,
            ApiResponse<ProductList>,
            ApiResponse<ProductDetail>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon, &LookupDocs),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Accounts", description = "Registration, login and profile"),
        (name = "Countries", description = "Country lookup"),
        (name = "Categories", description = "Product category lookup"),
        (name = "Marketplaces", description = "Marketplace lookup"),
        (name = "Statuses", description = "Product status lookup"),
        (name = "Reputations", description = "Seller reputation lookup"),
        (name = "Profiles", description = "User profile type lookup"),
        (name = "Departments", description = "Departments within a country"),
        (name = "Cities", description = "Cities within a department"),
        (name = "Stores", description = "Seller stores"),
        (name = "Products", description = "Product catalog"),
        (name = "Reels", description = "Short product videos"),
        (name = "Favorites", description = "Favorite endpoints"),
        (name = "Likes", description = "Product likes"),
        (name = "Comments", description = "Product comments"),
        (name = "Videos", description = "Generated promotional videos"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_paths_are_documented() {
        let doc = ApiDoc::openapi();
        for (resource, _) in LOOKUP_RESOURCES {
            assert!(doc.paths.paths.contains_key(&format!("/api/{resource}")));
            assert!(doc.paths.paths.contains_key(&format!("/api/{resource}/{{id}}")));
        }
        assert!(doc.paths.paths.contains_key("/api/products/paginated"));
    }
}
