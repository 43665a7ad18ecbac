use crate::layout::Cursor;
use crate::surface::RenderSurface;
use crate::units::Pt;

/// Make sure the current page has `needed` points of vertical room below the
/// cursor, breaking to a new page if it does not. Returns whether a page break
/// happened.
///
/// On a break, the surface emits a new physical page, the cursor is reset to
/// the top margin, and `on_new_page` is invoked so the caller can redraw
/// whatever must reappear on every page fragment (a page border, a table's
/// header row). The hook receives the surface and the already-reset cursor
/// and may advance the cursor past whatever it draws.
///
/// A cursor already sitting at the top margin never triggers a break: nothing
/// has been drawn on the page yet, so breaking would only produce a blank
/// page. This also means a block taller than one full page's usable height is
/// not specially handled — it breaks once and then overflows the fresh page.
/// That is an accepted limitation; keep single blocks smaller than a page.
pub fn ensure_room<S, F>(surface: &mut S, cursor: &mut Cursor, needed: Pt, on_new_page: F) -> bool
where
    S: RenderSurface + ?Sized,
    F: FnOnce(&mut S, &mut Cursor),
{
    let top = surface.geometry().top();
    let bottom = surface.geometry().bottom();

    if cursor.peek() + needed <= bottom {
        return false;
    }
    if cursor.peek() <= top {
        return false;
    }

    log::debug!(
        "page break: y={} + needed={} exceeds bottom={}",
        cursor.peek(),
        needed,
        bottom
    );

    surface.new_page();
    cursor.reset_to(top);
    on_new_page(surface, cursor);
    true
}
