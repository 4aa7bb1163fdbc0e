/*!
# Introductory Tutorial for ubasic+

ubasic+ is a very small BASIC for a classroom robot. Programs are typed on
a PC, downloaded into one of four program stores on the robot and run
from there. The `ubasic` command does the same on a PC so programs can be
tried before they go anywhere near a table edge.

Save the following as `hello.bas`.

```text
# say hello then flash the lights
print 'hello';
for i = 1 to 3 {
    leds 2 2 2 2;
    wait 5;
    leds 0 0 0 0;
    wait 5
}
```

Then run it.

<pre><code>&nbsp;$ ubasic run hello.bas
&nbsp;hello
</code></pre>

Add `--trace` to see what the LEDs would be doing.
Stop a running program with CTRL-C. On the robot the motors are braked
whenever a program is stopped.

There are no line numbers and line breaks mean nothing. Statements are
separated by `;` except where a `}` or the end of the program follows.
Blocks are written in braces and may be nested.

To put a program into store 2, download it.

<pre><code>&nbsp;$ ubasic download --slot 2 --from hello.bas
&nbsp;$ ubasic list --slot 2
&nbsp;print 'hello';
&nbsp;for i = 1 to 3 {
&nbsp;leds 2 2 2 2;
&nbsp;...
</code></pre>

Notice the listing is squeezed. Comments, indentation and runs of spaces
are removed on the way in so more program fits in the 512 bytes of
program memory.
*/
