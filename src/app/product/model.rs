//! 产品数据模型

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
}

/// 创建产品请求
///
/// 客户端传入的 `id` 会被忽略；缺失或为 `null` 的字段取空字符串 / 0.0，不做校验。
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewProduct {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// 更新产品请求（浅合并，只覆盖出现的字段）
#[derive(Debug, Default, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
}

impl Product {
    pub fn from_new(id: String, new: NewProduct) -> Self {
        Self {
            id,
            name: new.name,
            category: new.category,
            price: new.price,
        }
    }

    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
    }
}

/// 启动时写入的示例数据
pub fn sample_products() -> Vec<Product> {
    [
        ("1", "Banana", "Fruits", 29.99),
        ("2", "Apple", "Fruits", 39.99),
        ("3", "Avocado", "Fruits", 59.99),
        ("4", "Spinach", "Vegetables", 5.99),
        ("5", "Basil", "Herb", 3.99),
        ("6", "Spring Onion", "Vegetables", 14.99),
    ]
    .into_iter()
    .map(|(id, name, category, price)| Product {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        price,
    })
    .collect()
}
