use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Recipe {
    Table,
    Id,
    Name,
    Markup,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum MealPlan {
    Table,
    Id,
    Name,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum MealPlanDay {
    Table,
    PlanId,
    Position,
    Day,
    RecipeId,
}

#[derive(Iden, Clone)]
pub enum PlanExclusion {
    Table,
    PlanId,
    Name,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum ShoppingList {
    Table,
    PlanId,
    CreatedAt,
    Ingredients,
}
