use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub enum Countries {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum Departments {
    Table,
    Id,
    Name,
    CountryId,
}

#[derive(DeriveIden)]
pub enum Cities {
    Table,
    Id,
    Name,
    DepartmentId,
}

#[derive(DeriveIden)]
pub enum Categories {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum Marketplaces {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum Statuses {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum Reputations {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum Profiles {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
    Email,
    PasswordHash,
    FirstName,
    LastName,
    PhoneNumber,
    Photo,
    Role,
    CountryId,
    ProfileId,
    ReputationId,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum Stores {
    Table,
    Id,
    Name,
    UserId,
    CityId,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum Products {
    Table,
    Id,
    Name,
    Description,
    Price,
    LikeCount,
    StatusId,
    CategoryId,
    MarketplaceId,
    StoreId,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum Reels {
    Table,
    Id,
    Name,
    ReelUri,
    ProductId,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum Favorites {
    Table,
    Id,
    UserId,
    ProductId,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum Comments {
    Table,
    Id,
    UserId,
    ProductId,
    Description,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum ProductLikes {
    Table,
    UserId,
    ProductId,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum GeneratedVideos {
    Table,
    Id,
    UserId,
    ExternalVideoId,
    Script,
    AvatarId,
    VoiceId,
    Status,
    VideoUrl,
    Error,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum AuditLogs {
    Table,
    Id,
    UserId,
    Action,
    Resource,
    Metadata,
    CreatedAt,
}
