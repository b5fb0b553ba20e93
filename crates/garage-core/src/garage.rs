//! ガレージ
//!
//! 挿入順を保つ車両コレクション。追加・修理費計算・削除・全消去を提供し、
//! 各操作の内容を [`ReportSink`] に1行ずつ報告する。
//!
//! ID の一意性は強制しない。ID による検索・削除は常に先頭一致で解決する。
//! 単一スレッドでの利用を前提とし、複数スレッドから使う場合は
//! 呼び出し側でガレージ全体を排他制御すること。

use crate::billing::FixBill;
use crate::model::{Variant, Vehicle};
use crate::report::{ReportSink, StdoutSink};
use tracing::debug;

/// 車両コレクション
#[derive(Debug, Clone)]
pub struct Garage<S = StdoutSink> {
    vehicles: Vec<Vehicle>,
    sink: S,
}

impl Garage<StdoutSink> {
    /// 標準出力に報告する空のガレージ
    pub fn new() -> Self {
        Self::with_sink(StdoutSink)
    }
}

impl Default for Garage<StdoutSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ReportSink> Garage<S> {
    pub fn with_sink(sink: S) -> Self {
        Self {
            vehicles: Vec::new(),
            sink,
        }
    }

    /// 挿入順の車両一覧
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// ID で検索（先頭一致）
    pub fn find(&self, id: u32) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// 報告なしで車両をまとめて格納する（フリートファイルからの初期在庫用）
    pub fn restock<I>(&mut self, vehicles: I)
    where
        I: IntoIterator<Item = Vehicle>,
    {
        let before = self.vehicles.len();
        self.vehicles.extend(vehicles);
        debug!(
            added = self.vehicles.len() - before,
            total = self.vehicles.len(),
            "Garage restocked"
        );
    }

    /// 末尾に追加
    ///
    /// `verbose` なら複数行の詳細、そうでなければ1行サマリーを報告する。
    /// 重複 ID のチェックは行わない。
    pub fn add_vehicle(&mut self, vehicle: Vehicle, verbose: bool) {
        if verbose {
            self.sink.multiline(&vehicle.long_description());
        } else {
            self.sink.line(&format!("Added: {}", vehicle.summary_line()));
        }
        debug!(id = vehicle.id, variant = %vehicle.variant(), "Vehicle added");
        self.vehicles.push(vehicle);
    }

    /// 修理費を計算して報告
    ///
    /// 該当 ID がなければ何もせず `None` を返す（報告もしない）。
    pub fn fix_vehicle(&mut self, id: u32) -> Option<FixBill> {
        let Some(vehicle) = self.find(id) else {
            debug!(id, "fix_vehicle: no vehicle with this id");
            return None;
        };
        let bill = FixBill::for_vehicle(vehicle);
        self.sink.line(&bill.report_line());
        Some(bill)
    }

    /// 全車両の修理費を現在の並び順で計算
    ///
    /// 各車両の ID で [`Garage::fix_vehicle`] を呼ぶため O(n²)。
    /// 重複 ID の車両は毎回先頭の車両として請求される。
    pub fn fix_all_vehicles(&mut self) -> Vec<FixBill> {
        let ids: Vec<u32> = self.vehicles.iter().map(|v| v.id).collect();
        ids.into_iter()
            .filter_map(|id| self.fix_vehicle(id))
            .collect()
    }

    /// ID で1台削除（先頭一致）
    ///
    /// 該当 ID がなければ何もしない（報告もしない）。
    pub fn remove_vehicle_by_id(&mut self, id: u32) {
        let Some(index) = self.vehicles.iter().position(|v| v.id == id) else {
            debug!(id, "remove_vehicle_by_id: no vehicle with this id");
            return;
        };

        self.sink.line(&format!("Removing vehicle with ID {}:", id));
        self.sink.line(&self.vehicles[index].basic_info());
        self.vehicles.remove(index);
        self.sink.line(&format!("Removed vehicle with ID {}.", id));
    }

    /// 指定車種をすべて削除し、削除件数を返す
    pub fn remove_vehicles_by_variant(&mut self, variant: Variant) -> usize {
        let removed = self.partition_out(|v| v.variant() == variant);

        if !removed.is_empty() {
            self.sink
                .line(&format!("Removing vehicles of type {}:", variant.label()));
            for vehicle in &removed {
                self.sink.line(&vehicle.basic_info());
            }
        }
        self.sink.line(&format!(
            "Removed {} vehicle(s) of type {}.",
            removed.len(),
            variant.label()
        ));
        removed.len()
    }

    /// 指定した複数車種をまとめて削除し、削除件数を返す
    ///
    /// 指定リストの重複は一致判定で自然に吸収される。空リストなら何も削除しない。
    pub fn remove_vehicles_by_variants(&mut self, variants: &[Variant]) -> usize {
        let labels: Vec<&str> = variants.iter().map(Variant::label).collect();
        self.sink.line(&format!(
            "Bulk removing vehicles of types {}:",
            labels.join(" and ")
        ));

        let removed = self.partition_out(|v| variants.contains(&v.variant()));
        for vehicle in &removed {
            self.sink.line(&vehicle.summary_line());
        }
        self.sink.line(&format!(
            "Bulk removed {} vehicle(s) of types: {}.",
            removed.len(),
            labels.join(", ")
        ));
        removed.len()
    }

    /// 全車両を削除し、削除件数を返す
    pub fn empty_garage(&mut self) -> usize {
        let count = self.vehicles.len();
        self.vehicles.clear();
        self.sink
            .line(&format!("Garage emptied. {} vehicle(s) removed.", count));
        count
    }

    /// 条件に一致する車両を取り出す（残りの相対順序は保持）
    fn partition_out<F>(&mut self, matches: F) -> Vec<Vehicle>
    where
        F: Fn(&Vehicle) -> bool,
    {
        let (removed, kept): (Vec<Vehicle>, Vec<Vehicle>) =
            std::mem::take(&mut self.vehicles)
                .into_iter()
                .partition(|v| matches(v));
        self.vehicles = kept;
        debug!(
            removed = removed.len(),
            remaining = self.vehicles.len(),
            "Vehicles removed"
        );
        removed
    }
}
