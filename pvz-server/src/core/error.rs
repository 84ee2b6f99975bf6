use thiserror::Error;

/// 服务器启动/运行期错误
///
/// 请求处理期的业务错误走 [`shared::error::AppError`]，这里只覆盖
/// 启动序列（工作目录、数据库初始化、端口绑定）和运行期的致命错误。
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("数据库初始化失败: {0}")]
    Database(#[from] shared::error::AppError),

    #[error("内部服务器错误")]
    Internal(#[from] anyhow::Error),
}

/// 启动序列的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
