//! Aurora design-system components for Leptos.
//!
//! Every component composes an `aurora-*` base class with the caller's
//! `class` through [`cn`], projects its presentation choices onto `data-*`
//! attributes external stylesheets select on, forwards `attr:*` attributes to
//! its root, and attaches the caller's `node_ref` to the element actually
//! rendered. Interactive components are controlled when given a value signal
//! and uncontrolled otherwise; every change is reported through the matching
//! `on_*_change` callback.
//!
//! Compound families are exported both flat (`ModalTrigger`) and grouped in a
//! namespace module (`modal::Trigger`). The view macro takes bare component
//! names, so bring namespaced parts into scope before using them in markup:
//!
//! ```ignore
//! use aurora_ui::modal::{Content, Root, Title, Trigger};
//! ```

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod components;
#[cfg(test)]
mod test_support;

pub use aurora_core::{
    cn, expect_scoped, require_context, use_theme, Accent, As, AuroraProvider, Orientation, Radius,
    Side, Size, ThemeConfig, ThemeMode, ThemeRadius, UiError,
};
pub use components::*;

/// Accordion parts.
pub mod accordion {
    pub use crate::components::{
        Accordion as Root, AccordionContent as Content, AccordionItem as Item,
        AccordionTrigger as Trigger,
    };
}

/// Alert parts.
pub mod alert {
    pub use crate::components::{
        Alert as Root, AlertDescription as Description, AlertIcon as Icon, AlertTitle as Title,
    };
}

/// Alert dialog parts.
pub mod alert_dialog {
    pub use crate::components::{
        AlertDialog as Root, AlertDialogAction as Action, AlertDialogCancel as Cancel,
        AlertDialogContent as Content, AlertDialogDescription as Description,
        AlertDialogTitle as Title, AlertDialogTrigger as Trigger,
    };
}

/// Breadcrumb parts.
pub mod breadcrumb {
    pub use crate::components::{
        Breadcrumb as Root, BreadcrumbItem as Item, BreadcrumbLink as Link,
        BreadcrumbList as List, BreadcrumbPage as Page, BreadcrumbSeparator as Separator,
    };
}

/// Collapsible parts.
pub mod collapsible {
    pub use crate::components::{
        Collapsible as Root, CollapsibleContent as Content, CollapsibleTrigger as Trigger,
    };
}

/// Command palette parts.
pub mod command {
    pub use crate::components::{
        Command as Root, CommandDialog as Dialog, CommandEmpty as Empty, CommandGroup as Group,
        CommandInput as Input, CommandItem as Item, CommandList as List,
        CommandSeparator as Separator,
    };
}

/// Dropdown menu parts.
pub mod dropdown_menu {
    pub use crate::components::{
        DropdownMenu as Root, DropdownMenuCheckboxItem as CheckboxItem,
        DropdownMenuContent as Content, DropdownMenuGroup as Group, DropdownMenuItem as Item,
        DropdownMenuLabel as Label, DropdownMenuRadioGroup as RadioGroup,
        DropdownMenuRadioItem as RadioItem, DropdownMenuSeparator as Separator,
        DropdownMenuSub as Sub, DropdownMenuSubContent as SubContent,
        DropdownMenuSubTrigger as SubTrigger, DropdownMenuTrigger as Trigger,
    };
}

/// Form parts.
pub mod form {
    pub use crate::components::{
        Form as Root, FormDescription as Description, FormField as Field, FormLabel as Label,
        FormMessage as Message,
    };
}

/// Hover card parts.
pub mod hover_card {
    pub use crate::components::{
        HoverCard as Root, HoverCardArrow as Arrow, HoverCardContent as Content,
        HoverCardTrigger as Trigger,
    };
}

/// Modal parts.
pub mod modal {
    pub use crate::components::{
        Modal as Root, ModalClose as Close, ModalContent as Content,
        ModalDescription as Description, ModalTitle as Title, ModalTrigger as Trigger,
    };
}

/// Navigation menu parts.
pub mod navigation_menu {
    pub use crate::components::{
        NavigationMenu as Root, NavigationMenuContent as Content,
        NavigationMenuIndicator as Indicator, NavigationMenuItem as Item,
        NavigationMenuLink as Link, NavigationMenuList as List,
        NavigationMenuTrigger as Trigger, NavigationMenuViewport as Viewport,
    };
}

/// Popover parts.
pub mod popover {
    pub use crate::components::{
        Popover as Root, PopoverArrow as Arrow, PopoverClose as Close,
        PopoverContent as Content, PopoverTrigger as Trigger,
    };
}

/// Radio group parts.
pub mod radio {
    pub use crate::components::{RadioGroup as Root, RadioItem as Item};
}

/// Select parts.
pub mod select {
    pub use crate::components::{
        Select as Root, SelectContent as Content, SelectGroup as Group, SelectItem as Item,
        SelectLabel as Label, SelectSeparator as Separator, SelectTrigger as Trigger,
        SelectValue as Value,
    };
}

/// Sheet parts.
pub mod sheet {
    pub use crate::components::{
        Sheet as Root, SheetClose as Close, SheetContent as Content,
        SheetDescription as Description, SheetTitle as Title, SheetTrigger as Trigger,
    };
}

/// Table parts.
pub mod table {
    pub use crate::components::{
        Table as Root, TableBody as Body, TableCaption as Caption, TableCell as Cell,
        TableFooter as Footer, TableHead as Head, TableHeader as Header, TableRow as Row,
    };
}

/// Tabs parts.
pub mod tabs {
    pub use crate::components::{
        Tabs as Root, TabsContent as Content, TabsList as List, TabsTrigger as Trigger,
    };
}

/// Toast parts.
pub mod toast {
    pub use crate::components::{
        Toast as Root, ToastAction as Action, ToastClose as Close,
        ToastDescription as Description, ToastProvider as Provider, ToastTitle as Title,
        Toaster as Viewport,
    };
}

/// Toggle group parts.
pub mod toggle_group {
    pub use crate::components::{ToggleGroup as Root, ToggleGroupItem as Item};
}

/// Toolbar parts.
pub mod toolbar {
    pub use crate::components::{
        Toolbar as Root, ToolbarButton as Button, ToolbarLink as Link,
        ToolbarSeparator as Separator, ToolbarToggleGroup as ToggleGroup,
        ToolbarToggleItem as ToggleItem,
    };
}

/// Tooltip parts.
pub mod tooltip {
    pub use crate::components::{
        Tooltip as Root, TooltipContent as Content, TooltipTrigger as Trigger,
    };
}

/// Convenience imports for applications composing Aurora components.
pub mod prelude {
    pub use crate::components::*;
    pub use aurora_core::{
        cn, use_theme, Accent, As, AuroraProvider, Orientation, Radius, Side, Size, ThemeConfig,
        ThemeMode, ThemeRadius,
    };
}
