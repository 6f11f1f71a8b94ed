// 統合テストのエントリーポイント

#[path = "../fixtures/mod.rs"]
mod fixtures;

mod test_accessor_contract;
mod test_main_entry_point;
mod test_strategy_equivalence;
