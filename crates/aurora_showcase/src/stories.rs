//! One gallery per component family.

use aurora_ui::prelude::*;
use leptos::*;

/// Named gallery rendered by the catalogue.
#[derive(Clone, Copy)]
pub struct Story {
    /// Stable identifier, also used as the catalogue tab value.
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
    /// Renders the gallery.
    pub render: fn() -> View,
}

/// Every story in catalogue order.
pub const STORIES: &[Story] = &[
    Story { id: "buttons", title: "Buttons", render: buttons },
    Story { id: "badges", title: "Badges and avatars", render: badges },
    Story { id: "cards", title: "Cards", render: cards },
    Story { id: "alerts", title: "Alerts", render: alerts },
    Story { id: "forms", title: "Forms", render: forms },
    Story { id: "selection", title: "Selection controls", render: selection },
    Story { id: "feedback", title: "Feedback", render: feedback },
    Story { id: "layout", title: "Layout", render: layout },
    Story { id: "data", title: "Data display", render: data },
    Story { id: "disclosure", title: "Disclosure", render: disclosure },
    Story { id: "dialogs", title: "Dialogs", render: dialogs },
    Story { id: "overlays", title: "Overlays", render: overlays },
    Story { id: "menus", title: "Menus", render: menus },
    Story { id: "navigation", title: "Navigation", render: navigation },
    Story { id: "command", title: "Command palette", render: command },
];

/// Looks up a story by id.
pub fn find_story(id: &str) -> Option<&'static Story> {
    STORIES.iter().find(|story| story.id == id)
}

fn buttons() -> View {
    let clicks = create_rw_signal(0_u32);
    view! {
        <div class="story-row">
            {ButtonVariant::ALL
                .iter()
                .map(|&variant| view! { <Button variant=variant>{variant.token()}</Button> })
                .collect_view()}
        </div>
        <div class="story-row">
            {Size::ALL
                .iter()
                .map(|&size| view! { <Button size=size accent=Accent::Violet>{size.token()}</Button> })
                .collect_view()}
        </div>
        <div class="story-row">
            <Button loading=true>"Saving"</Button>
            <Button disabled=true variant=ButtonVariant::Outline>"Disabled"</Button>
            <Button
                variant=ButtonVariant::Glow
                accent=Accent::Emerald
                on_click=Callback::new(move |_| clicks.update(|count| *count += 1))
            >
                {move || format!("Clicked {}", clicks.get())}
            </Button>
        </div>
    }
    .into_view()
}

fn badges() -> View {
    view! {
        <div class="story-row">
            {BadgeVariant::ALL
                .iter()
                .map(|&variant| view! { <Badge variant=variant>{variant.token()}</Badge> })
                .collect_view()}
            {Accent::ALL
                .iter()
                .map(|&accent| view! { <Badge accent=accent>{accent.token()}</Badge> })
                .collect_view()}
        </div>
        <div class="story-row">
            <Avatar alt="Ada Lovelace" src="/avatars/ada.png" />
            <Avatar alt="Grace Hopper" fallback="GH" variant=AvatarVariant::Square accent="amber" />
            <Avatar alt="Unknown" size=Size::Sm />
        </div>
    }
    .into_view()
}

fn cards() -> View {
    view! {
        <div class="story-grid">
            {CardVariant::ALL
                .iter()
                .map(|&variant| view! { <Card variant=variant>{variant.token()}</Card> })
                .collect_view()}
            <Card as_=As::Article variant=CardVariant::Glass>"Rendered as an article"</Card>
        </div>
    }
    .into_view()
}

fn alerts() -> View {
    AlertVariant::ALL
        .iter()
        .map(|&variant| {
            view! {
                <Alert variant=variant>
                    <AlertIcon />
                    <AlertTitle>{variant.token()}</AlertTitle>
                    <AlertDescription>"Alerts pick their live-region role from severity."</AlertDescription>
                </Alert>
            }
        })
        .collect_view()
}

fn forms() -> View {
    let email = create_rw_signal(String::new());
    let error = Signal::derive(move || {
        if email.with(|email| email.is_empty() || email.contains('@')) {
            String::new()
        } else {
            String::from("Enter a valid email address.")
        }
    });
    view! {
        <Form>
            <FormField name="email" error=error required=true>
                <FormLabel>"Email"</FormLabel>
                <Input
                    input_type="email"
                    placeholder="you@example.com"
                    value=email
                    on_input=Callback::new(move |ev| email.set(event_target_value(&ev)))
                />
                <FormDescription>"We never share it."</FormDescription>
                <FormMessage />
            </FormField>
            <FormField name="bio">
                <FormLabel>"Bio"</FormLabel>
                <Textarea auto_resize=true rows=3 variant=InputVariant::Filled />
            </FormField>
            <Label html_for="standalone" required=true>"Standalone label"</Label>
            <Input id="standalone" variant=InputVariant::Ghost size=Size::Sm />
            <Button button_type="submit">"Submit"</Button>
        </Form>
    }
    .into_view()
}

fn selection() -> View {
    let volume = create_rw_signal(vec![40.0]);
    view! {
        <div class="story-stack">
            <Checkbox default_checked=CheckedState::Checked />
            <Checkbox default_checked=CheckedState::Indeterminate size=Size::Lg />
            <Switch default_checked=true />
            <RadioGroup default_value="comfortable" attr:aria-label="Density">
                <RadioItem value="compact" />
                <RadioItem value="comfortable" />
                <RadioItem value="spacious" disabled=true />
            </RadioGroup>
            <Toggle variant=ToggleVariant::Glow attr:aria-label="Bold">"B"</Toggle>
            <ToggleGroup mode=SelectionMode::Multiple default_value=vec!["italic".to_string()]>
                <ToggleGroupItem value="bold">"B"</ToggleGroupItem>
                <ToggleGroupItem value="italic">"I"</ToggleGroupItem>
                <ToggleGroupItem value="underline">"U"</ToggleGroupItem>
            </ToggleGroup>
            <Slider
                value=volume
                on_value_change=Callback::new(move |next| volume.set(next))
                attr:aria-label="Volume"
            />
            <Slider variant=SliderVariant::Glow default_value=vec![20.0, 80.0] step=5.0 />
            <Select default_value="cyan">
                <SelectTrigger>
                    <SelectValue placeholder="Accent" />
                </SelectTrigger>
                <SelectContent>
                    <SelectGroup>
                        <SelectLabel>"Accents"</SelectLabel>
                        {Accent::ALL
                            .iter()
                            .map(|&accent| view! { <SelectItem value=accent.token() /> })
                            .collect_view()}
                    </SelectGroup>
                </SelectContent>
            </Select>
        </div>
    }
    .into_view()
}

#[component]
fn ToastButton() -> impl IntoView {
    let toasts = use_toast();
    view! {
        <Button on_click=Callback::new(move |_| {
            toasts.show(
                ToastRequest::new("Settings saved")
                    .description("Your preferences are stored.")
                    .variant(ToastVariant::Success),
            );
        })>
            "Show toast"
        </Button>
    }
}

fn feedback() -> View {
    view! {
        <div class="story-stack">
            <Progress value=64.0 />
            <Progress variant=ProgressVariant::Glow value=30.0 max=50.0 size=Size::Lg />
            <Progress indeterminate=true />
            <div class="story-row">
                {SpinnerVariant::ALL
                    .iter()
                    .map(|&variant| view! { <Spinner variant=variant /> })
                    .collect_view()}
            </div>
            <Skeleton width="12rem" />
            <Skeleton shape=SkeletonShape::Circular width="3rem" height="3rem" variant=SkeletonVariant::Shimmer />
            <Skeleton shape=SkeletonShape::Rectangular height="6rem" animated=false />
            <ToastProvider>
                <ToastButton />
                <Toast variant=ToastVariant::Warning duration=0>
                    <ToastTitle>"Storage almost full"</ToastTitle>
                    <ToastDescription>"Free up space to keep syncing."</ToastDescription>
                    <ToastAction alt_text="Open storage settings">"Manage"</ToastAction>
                    <ToastClose />
                </Toast>
                <Toaster />
            </ToastProvider>
        </div>
    }
    .into_view()
}

fn layout() -> View {
    let photo_ratio = 4.0 / 3.0;
    view! {
        <div class="story-stack">
            <Separator />
            <Separator variant=SeparatorVariant::Glow decorative=false />
            <div class="story-row">
                "Left"
                <Separator orientation=Orientation::Vertical />
                "Right"
            </div>
            <AspectRatio ratio=photo_ratio>
                <div class="story-fill">"4:3"</div>
            </AspectRatio>
            <ScrollArea variant=ScrollAreaVariant::Minimal>
                {(1..=20).map(|line| view! { <p>{format!("Line {line}")}</p> }).collect_view()}
            </ScrollArea>
            <Button>
                <VisuallyHidden>"Open "</VisuallyHidden>
                "Settings"
            </Button>
        </div>
    }
    .into_view()
}

fn data() -> View {
    let rows = [("Aurora", "cyan", "3"), ("Nebula", "violet", "7"), ("Comet", "amber", "1")];
    view! {
        <Table variant=TableVariant::Striped sticky_header=true>
            <TableCaption>"Active themes"</TableCaption>
            <TableHeader>
                <TableRow>
                    <TableHead>"Name"</TableHead>
                    <TableHead>"Accent"</TableHead>
                    <TableHead>"Users"</TableHead>
                </TableRow>
            </TableHeader>
            <TableBody>
                {rows
                    .into_iter()
                    .map(|(name, accent, users)| {
                        view! {
                            <TableRow>
                                <TableCell>{name}</TableCell>
                                <TableCell>{accent}</TableCell>
                                <TableCell>{users}</TableCell>
                            </TableRow>
                        }
                    })
                    .collect_view()}
            </TableBody>
            <TableFooter>
                <TableRow>
                    <TableCell>"Total"</TableCell>
                    <TableCell>""</TableCell>
                    <TableCell>"11"</TableCell>
                </TableRow>
            </TableFooter>
        </Table>
    }
    .into_view()
}

fn disclosure() -> View {
    view! {
        <div class="story-stack">
            <Accordion collapsible=true default_value=vec!["shipping".to_string()]>
                <AccordionItem value="shipping">
                    <AccordionTrigger>"Shipping"</AccordionTrigger>
                    <AccordionContent>"Ships in two business days."</AccordionContent>
                </AccordionItem>
                <AccordionItem value="returns">
                    <AccordionTrigger>"Returns"</AccordionTrigger>
                    <AccordionContent>"Thirty days, no questions."</AccordionContent>
                </AccordionItem>
            </Accordion>
            <Collapsible>
                <CollapsibleTrigger>"Show details"</CollapsibleTrigger>
                <CollapsibleContent>"Collapsible content"</CollapsibleContent>
            </Collapsible>
            <Tabs default_value="account">
                <TabsList>
                    <TabsTrigger value="account">"Account"</TabsTrigger>
                    <TabsTrigger value="password">"Password"</TabsTrigger>
                    <TabsTrigger value="billing" disabled=true>"Billing"</TabsTrigger>
                </TabsList>
                <TabsContent value="account">"Account settings"</TabsContent>
                <TabsContent value="password">"Password settings"</TabsContent>
            </Tabs>
        </div>
    }
    .into_view()
}

fn dialogs() -> View {
    view! {
        <div class="story-row">
            <Modal>
                <ModalTrigger>"Edit profile"</ModalTrigger>
                <ModalContent size=Size::Lg>
                    <ModalTitle>"Edit profile"</ModalTitle>
                    <ModalDescription>"Changes are saved when you close the dialog."</ModalDescription>
                    <ModalClose />
                </ModalContent>
            </Modal>
            <AlertDialog>
                <AlertDialogTrigger>"Delete project"</AlertDialogTrigger>
                <AlertDialogContent variant=AlertDialogVariant::Destructive size=AlertDialogSize::Sm>
                    <AlertDialogTitle>"Delete project?"</AlertDialogTitle>
                    <AlertDialogDescription>"This cannot be undone."</AlertDialogDescription>
                    <AlertDialogCancel>"Cancel"</AlertDialogCancel>
                    <AlertDialogAction>"Delete"</AlertDialogAction>
                </AlertDialogContent>
            </AlertDialog>
            {Side::ALL
                .iter()
                .map(|&side| {
                    view! {
                        <Sheet>
                            <SheetTrigger>{side.token()}</SheetTrigger>
                            <SheetContent side=side>
                                <SheetTitle>"Sheet"</SheetTitle>
                                <SheetDescription>"Anchored to one edge."</SheetDescription>
                                <SheetClose />
                            </SheetContent>
                        </Sheet>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_view()
}

fn overlays() -> View {
    view! {
        <div class="story-row">
            <Popover>
                <PopoverTrigger>"Dimensions"</PopoverTrigger>
                <PopoverContent variant=OverlayVariant::Glass>
                    <Input placeholder="Width" />
                    <PopoverArrow />
                    <PopoverClose />
                </PopoverContent>
            </Popover>
            <HoverCard>
                <HoverCardTrigger href="https://leptos.dev">"@leptos"</HoverCardTrigger>
                <HoverCardContent side=Side::Top>
                    "Build fast web applications with Rust."
                    <HoverCardArrow />
                </HoverCardContent>
            </HoverCard>
            <Tooltip>
                <TooltipTrigger>"Hover me"</TooltipTrigger>
                <TooltipContent>"Add to library"</TooltipContent>
            </Tooltip>
        </div>
    }
    .into_view()
}

fn menus() -> View {
    let status_bar = create_rw_signal(true);
    view! {
        <DropdownMenu>
            <DropdownMenuTrigger>"Open menu"</DropdownMenuTrigger>
            <DropdownMenuContent>
                <DropdownMenuLabel>"My account"</DropdownMenuLabel>
                <DropdownMenuGroup>
                    <DropdownMenuItem>"Profile"</DropdownMenuItem>
                    <DropdownMenuItem disabled=true>"Billing"</DropdownMenuItem>
                </DropdownMenuGroup>
                <DropdownMenuSeparator />
                <DropdownMenuCheckboxItem
                    checked=status_bar
                    on_checked_change=Callback::new(move |next| status_bar.set(next))
                >
                    "Status bar"
                </DropdownMenuCheckboxItem>
                <DropdownMenuRadioGroup default_value="bottom">
                    <DropdownMenuRadioItem value="top">"Top"</DropdownMenuRadioItem>
                    <DropdownMenuRadioItem value="bottom">"Bottom"</DropdownMenuRadioItem>
                </DropdownMenuRadioGroup>
                <DropdownMenuSub>
                    <DropdownMenuSubTrigger>"Share"</DropdownMenuSubTrigger>
                    <DropdownMenuSubContent>
                        <DropdownMenuItem>"Email"</DropdownMenuItem>
                        <DropdownMenuItem>"Messages"</DropdownMenuItem>
                    </DropdownMenuSubContent>
                </DropdownMenuSub>
            </DropdownMenuContent>
        </DropdownMenu>
    }
    .into_view()
}

fn navigation() -> View {
    view! {
        <div class="story-stack">
            <Breadcrumb>
                <BreadcrumbList>
                    <BreadcrumbItem>
                        <BreadcrumbLink href="/">"Home"</BreadcrumbLink>
                    </BreadcrumbItem>
                    <BreadcrumbSeparator />
                    <BreadcrumbItem>
                        <BreadcrumbLink href="/components">"Components"</BreadcrumbLink>
                    </BreadcrumbItem>
                    <BreadcrumbSeparator />
                    <BreadcrumbItem>
                        <BreadcrumbPage>"Breadcrumb"</BreadcrumbPage>
                    </BreadcrumbItem>
                </BreadcrumbList>
            </Breadcrumb>
            <NavigationMenu>
                <NavigationMenuList>
                    <NavigationMenuItem value="start">
                        <NavigationMenuTrigger>"Getting started"</NavigationMenuTrigger>
                        <NavigationMenuContent>
                            <NavigationMenuLink href="/docs/install">"Installation"</NavigationMenuLink>
                        </NavigationMenuContent>
                    </NavigationMenuItem>
                    <NavigationMenuItem>
                        <NavigationMenuLink href="/docs" active=true>"Docs"</NavigationMenuLink>
                    </NavigationMenuItem>
                    <NavigationMenuIndicator />
                </NavigationMenuList>
                <NavigationMenuViewport />
            </NavigationMenu>
            <Toolbar variant=ToolbarVariant::Glass attr:aria-label="Formatting">
                <ToolbarToggleGroup mode=SelectionMode::Multiple>
                    <ToolbarToggleItem value="bold">"B"</ToolbarToggleItem>
                    <ToolbarToggleItem value="italic">"I"</ToolbarToggleItem>
                </ToolbarToggleGroup>
                <ToolbarSeparator />
                <ToolbarLink href="/changes">"Edited 2 minutes ago"</ToolbarLink>
                <ToolbarButton>"Share"</ToolbarButton>
            </Toolbar>
        </div>
    }
    .into_view()
}

fn command() -> View {
    let last = create_rw_signal(String::new());
    let select = Callback::new(move |value: String| last.set(value));
    view! {
        <Command>
            <CommandInput placeholder="Type a command or search..." />
            <CommandList>
                <CommandGroup heading="Suggestions">
                    <CommandItem value="Calendar" on_select=select>"Calendar"</CommandItem>
                    <CommandItem value="Emoji" keywords=vec!["smiley".to_string()] on_select=select>"Search emoji"</CommandItem>
                </CommandGroup>
                <CommandSeparator />
                <CommandGroup heading="Settings">
                    <CommandItem value="Profile" on_select=select>"Profile"</CommandItem>
                    <CommandItem value="Billing" disabled=true>"Billing"</CommandItem>
                </CommandGroup>
                <CommandEmpty>"No results found."</CommandEmpty>
            </CommandList>
        </Command>
        <p class="story-caption">{move || format!("Last command: {}", last.get())}</p>
        <CommandDialog>
            <CommandInput />
        </CommandDialog>
    }
    .into_view()
}
