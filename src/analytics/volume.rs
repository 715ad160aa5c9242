use crate::chain::{OptionChainSnapshot, OptionSide};

use super::model::VolumeAnalysis;
use super::{ratio, saturating_total, side_quotes};

pub(crate) fn analyze(snapshot: &OptionChainSnapshot) -> VolumeAnalysis {
    let total_call_volume =
        saturating_total(side_quotes(snapshot, OptionSide::Call).filter_map(|q| q.volume));
    let total_put_volume =
        saturating_total(side_quotes(snapshot, OptionSide::Put).filter_map(|q| q.volume));

    VolumeAnalysis {
        total_call_volume,
        total_put_volume,
        volume_pcr: ratio(total_put_volume, total_call_volume),
    }
}
