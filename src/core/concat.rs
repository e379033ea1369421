use crate::utils::error::{EtlError, Result};
use polars::prelude::{
    concat_lf_diagonal, lit, DataFrame, DataType, IntoLazy, LazyFrame, UnionArgs,
};
use std::collections::HashMap;

/// How diagonal concatenation reconciles a column whose type differs
/// between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcatPolicy {
    /// Types must agree.
    Strict,
    /// Differing types are cast to their common supertype.
    Relaxed,
}

impl ConcatPolicy {
    fn union_args(self) -> UnionArgs {
        UnionArgs {
            to_supertypes: self == ConcatPolicy::Relaxed,
            ..Default::default()
        }
    }
}

/// 新增（或取代）整欄皆為該年份的 `Year` 欄位
pub fn with_year(frame: DataFrame, year: u32) -> Result<DataFrame> {
    let tagged = frame
        .lazy()
        .with_column(lit(i64::from(year)).alias("Year"))
        .collect()?;
    Ok(tagged)
}

/// 以欄位聯集串接多個表格，缺少的欄位補 null；列順序維持輸入順序
pub fn concat_diagonal(frames: Vec<DataFrame>, policy: ConcatPolicy) -> Result<DataFrame> {
    if frames.is_empty() {
        return Err(EtlError::processing("cannot concatenate zero frames"));
    }
    if policy == ConcatPolicy::Strict {
        check_strict_schema(&frames)?;
    }

    let lazy: Vec<LazyFrame> = frames.into_iter().map(IntoLazy::lazy).collect();
    let combined = concat_lf_diagonal(lazy, policy.union_args())?.collect()?;
    Ok(combined)
}

// 同名欄位在每個年份必須是同一型別
fn check_strict_schema(frames: &[DataFrame]) -> Result<()> {
    let mut seen: HashMap<&str, &DataType> = HashMap::new();
    for frame in frames {
        for column in frame.get_columns() {
            let name = column.name().as_str();
            match seen.get(name) {
                Some(&first) if first != column.dtype() => {
                    return Err(EtlError::SchemaMismatch {
                        column: name.to_string(),
                        left: first.to_string(),
                        right: column.dtype().to_string(),
                    });
                }
                Some(_) => {}
                None => {
                    seen.insert(name, column.dtype());
                }
            }
        }
    }
    Ok(())
}
