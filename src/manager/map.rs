use crate::controller::Prompter;
use crate::domain::SubwayMap;
use crate::error::Result;
use crate::screen::ActionType;
use crate::view::View;

pub(super) fn manage<V: View>(action: ActionType, map: &SubwayMap, prompter: &mut Prompter<'_, V>) -> Result<()> {
    if action == ActionType::View {
        prompter.view_mut().print_map(map.lines())?;
    }
    Ok(())
}
