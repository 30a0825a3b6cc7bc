//! Component modules and the helpers they share.

use std::sync::atomic::{AtomicUsize, Ordering};

use aurora_core::{
    active_state_token, checked_state_token, cn, expect_scoped, flag_token, open_state_token, token_enum,
    use_controllable, Accent, Controllable, Orientation, Side, Size,
};
use leptos::ev::{KeyboardEvent, MouseEvent, SubmitEvent};
use leptos::*;

mod delay;
mod focus;

mod accordion;
mod alert;
mod alert_dialog;
mod aspect_ratio;
mod avatar;
mod badge;
mod breadcrumb;
mod button;
mod card;
mod checkbox;
mod collapsible;
mod command;
mod dialog;
mod dropdown_menu;
mod form;
mod hover_card;
mod input;
mod label;
mod modal;
mod navigation_menu;
mod popover;
mod progress;
mod radio;
mod scroll_area;
mod select;
mod separator;
mod sheet;
mod skeleton;
mod slider;
mod spinner;
mod switch;
mod table;
mod tabs;
mod textarea;
mod toast;
mod toggle;
mod toolbar;
mod tooltip;
mod visually_hidden;

pub use accordion::{Accordion, AccordionContent, AccordionItem, AccordionTrigger};
pub use alert::{Alert, AlertDescription, AlertIcon, AlertTitle, AlertVariant};
pub use alert_dialog::{
    AlertDialog, AlertDialogAction, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogSize, AlertDialogTitle, AlertDialogTrigger,
    AlertDialogVariant,
};
pub use aspect_ratio::AspectRatio;
pub use avatar::{Avatar, AvatarVariant};
pub use badge::{Badge, BadgeVariant};
pub use breadcrumb::{
    Breadcrumb, BreadcrumbItem, BreadcrumbLink, BreadcrumbList, BreadcrumbPage,
    BreadcrumbSeparator,
};
pub use button::{Button, ButtonVariant};
pub use card::{Card, CardVariant};
pub use checkbox::{CheckedState, Checkbox};
pub use collapsible::{Collapsible, CollapsibleContent, CollapsibleTrigger};
pub use command::{
    matches_search, Command, CommandDialog, CommandEmpty, CommandGroup, CommandInput,
    CommandItem, CommandList, CommandSeparator,
};
pub use dropdown_menu::{
    DropdownMenu, DropdownMenuCheckboxItem, DropdownMenuContent, DropdownMenuGroup,
    DropdownMenuItem, DropdownMenuLabel, DropdownMenuRadioGroup, DropdownMenuRadioItem,
    DropdownMenuSeparator, DropdownMenuSub, DropdownMenuSubContent, DropdownMenuSubTrigger,
    DropdownMenuTrigger,
};
pub use form::{
    try_use_form_field, use_form_field, FieldIds, FieldStatus, Form, FormDescription, FormField,
    FormFieldContext, FormLabel, FormMessage, MessageType,
};
pub use hover_card::{HoverCard, HoverCardArrow, HoverCardContent, HoverCardTrigger};
pub use input::{Input, InputVariant};
pub use label::{Label, LabelSize};
pub use modal::{Modal, ModalClose, ModalContent, ModalDescription, ModalTitle, ModalTrigger};
pub use navigation_menu::{
    NavigationMenu, NavigationMenuContent, NavigationMenuIndicator, NavigationMenuItem,
    NavigationMenuLink, NavigationMenuList, NavigationMenuTrigger, NavigationMenuViewport,
};
pub use popover::{Popover, PopoverArrow, PopoverClose, PopoverContent, PopoverTrigger};
pub use progress::{Progress, ProgressVariant};
pub use radio::{RadioGroup, RadioItem};
pub use scroll_area::{ScrollArea, ScrollAreaVariant};
pub use select::{
    Select, SelectContent, SelectGroup, SelectItem, SelectLabel, SelectSeparator, SelectTrigger,
    SelectValue,
};
pub use separator::{Separator, SeparatorVariant};
pub use sheet::{Sheet, SheetClose, SheetContent, SheetDescription, SheetTitle, SheetTrigger};
pub use skeleton::{Skeleton, SkeletonShape, SkeletonVariant};
pub use slider::{Slider, SliderVariant};
pub use spinner::{Spinner, SpinnerVariant};
pub use switch::Switch;
pub use table::{
    Table, TableBody, TableCaption, TableCell, TableFooter, TableHead, TableHeader, TableRow,
    TableVariant,
};
pub use tabs::{Tabs, TabsContent, TabsList, TabsTrigger};
pub use textarea::Textarea;
pub use toast::{
    use_toast, Toast, ToastAction, ToastClose, ToastDescription, ToastHandle, ToastProvider,
    ToastRequest, ToastTitle, ToastVariant, Toaster,
};
pub use toggle::{Toggle, ToggleGroup, ToggleGroupItem, ToggleVariant};
pub use toolbar::{
    Toolbar, ToolbarButton, ToolbarLink, ToolbarSeparator, ToolbarToggleGroup, ToolbarToggleItem,
    ToolbarVariant,
};
pub use tooltip::{Tooltip, TooltipContent, TooltipTrigger};
pub use visually_hidden::{VisuallyHidden, VISUALLY_HIDDEN_STYLE};

token_enum! {
    /// Whether a group allows one or several items to be active.
    pub enum SelectionMode {
        /// At most one active item.
        Single => "single",
        /// Any number of active items.
        Multiple => "multiple",
    }
    default Single;
}

token_enum! {
    /// Overlay surface treatments shared by popovers, hover cards, and menus.
    pub enum OverlayVariant {
        /// Opaque surface.
        Default => "default",
        /// Translucent surface.
        Glass => "glass",
    }
    default Default;
}

/// Selection after activating `item`.
///
/// Single mode replaces the selection, or clears it when `item` was already
/// active and `allow_empty` holds. Multiple mode toggles membership and keeps
/// order.
pub(crate) fn toggle_selection(
    mode: SelectionMode,
    allow_empty: bool,
    current: &[String],
    item: &str,
) -> Vec<String> {
    let active = current.iter().any(|value| value == item);
    match (mode, active) {
        (SelectionMode::Single, true) if allow_empty => Vec::new(),
        (SelectionMode::Single, true) => current.to_vec(),
        (SelectionMode::Single, false) => vec![item.to_string()],
        (SelectionMode::Multiple, true) => current
            .iter()
            .filter(|value| value.as_str() != item)
            .cloned()
            .collect(),
        (SelectionMode::Multiple, false) => {
            let mut next = current.to_vec();
            next.push(item.to_string());
            next
        }
    }
}

static NEXT_PART_ID: AtomicUsize = AtomicUsize::new(1);

/// Document-unique id for linking compound parts through ARIA attributes.
pub(crate) fn next_part_id(prefix: &str) -> String {
    format!("aurora-{prefix}-{}", NEXT_PART_ID.fetch_add(1, Ordering::Relaxed))
}

/// Inline style carrying an overlay's distance from its anchor.
pub(crate) fn side_offset_style(offset: u32) -> String {
    format!("--aurora-side-offset: {offset}px")
}

fn check_icon() -> impl IntoView {
    view! {
        <svg class="aurora-icon" viewBox="0 0 14 14" fill="none" aria-hidden="true">
            <path
                d="M11.5 3.5L5.5 10.5L2.5 7.5"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        </svg>
    }
}

fn dash_icon() -> impl IntoView {
    view! {
        <svg class="aurora-icon" viewBox="0 0 14 14" fill="none" aria-hidden="true">
            <path d="M3 7H11" stroke="currentColor" stroke-width="2" stroke-linecap="round" />
        </svg>
    }
}

fn chevron_icon() -> impl IntoView {
    view! {
        <svg class="aurora-icon" viewBox="0 0 14 14" fill="none" aria-hidden="true">
            <path
                d="M3.5 5.25L7 8.75L10.5 5.25"
                stroke="currentColor"
                stroke-width="1.5"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        </svg>
    }
}

fn close_icon() -> impl IntoView {
    view! {
        <svg class="aurora-icon" viewBox="0 0 14 14" fill="none" aria-hidden="true">
            <path
                d="M3.5 3.5L10.5 10.5M10.5 3.5L3.5 10.5"
                stroke="currentColor"
                stroke-width="1.5"
                stroke-linecap="round"
            />
        </svg>
    }
}
