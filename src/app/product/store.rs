//! 产品内存存储
//!
//! 所有读写都经过同一把 `RwLock`；更新的 查找-合并 在同一个写锁内完成，
//! 并发删除后不会把记录重新写回。

use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use super::model::{sample_products, NewProduct, Product, ProductPatch};

#[derive(Debug, Default)]
pub struct ProductStore {
    products: RwLock<Vec<Product>>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }

    /// 带六条示例产品的存储
    pub fn seeded() -> Self {
        let products = sample_products();
        info!("✅ 已初始化 {} 个示例产品", products.len());
        Self::with_products(products)
    }

    /// 按插入顺序返回全部产品
    pub async fn list(&self) -> Vec<Product> {
        self.products.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Option<Product> {
        self.products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.products.read().await.iter().any(|p| p.id == id)
    }

    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    /// 生成新 id 并追加到末尾
    pub async fn insert(&self, new: NewProduct) -> Product {
        let mut products = self.products.write().await;

        let mut id = Uuid::new_v4().to_string();
        while products.iter().any(|p| p.id == id) {
            id = Uuid::new_v4().to_string();
        }

        let product = Product::from_new(id, new);
        products.push(product.clone());
        info!(id = %product.id, name = %product.name, "product created");
        product
    }

    /// 合并字段并返回更新后的完整列表；不存在时返回 `None`
    pub async fn update(&self, id: &str, patch: ProductPatch) -> Option<Vec<Product>> {
        let mut products = self.products.write().await;
        let product = products.iter_mut().find(|p| p.id == id)?;
        product.apply(patch);
        info!(id, "product updated");
        Some(products.clone())
    }

    /// 删除所有匹配 `id` 的记录，返回删除条数
    pub async fn remove(&self, id: &str) -> usize {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);
        let removed = before - products.len();
        debug!(id, removed, "product remove");
        removed
    }
}
